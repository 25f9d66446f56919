//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Stop the server gracefully once Ctrl+C or SIGTERM arrives.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let ctrl_c = async {
        signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)
    };

    #[cfg(unix)]
    {
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .map_err(ShutdownSignalError::SigTerm)?
                .recv()
                .await;

            Ok::<(), ShutdownSignalError>(())
        };

        tokio::select! {
            result = ctrl_c => {
                result?;
                tracing::info!("ctrl_c signal received");
            }
            result = terminate => {
                result?;
                tracing::info!("terminate signal received");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await?;
        tracing::info!("ctrl_c signal received");
    }

    handle.stop_graceful(None);

    Ok(())
}
