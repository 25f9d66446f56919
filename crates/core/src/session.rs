//! Guest Session

use serde::{Deserialize, Serialize};

use crate::orders::Order;

/// Editable profile details for the current guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name.
    pub name: String,

    /// Phone number.
    pub phone: String,

    /// Email address. Keys all personalized gateway fetches.
    pub email: String,

    /// Date of birth, free-form.
    pub date_of_birth: String,
}

/// A partial profile edit; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    /// New name, if changing.
    pub name: Option<String>,

    /// New phone number, if changing.
    pub phone: Option<String>,

    /// New email address, if changing.
    pub email: Option<String>,

    /// New date of birth, if changing.
    pub date_of_birth: Option<String>,
}

/// In-memory state for one guest's app session.
///
/// One instance is constructed per application session and threaded through
/// explicitly; there is no ambient global. Nothing here survives the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Table the guest is seated at; empty until login.
    pub table_number: String,

    /// Number of guests at the table.
    pub guest_count: u32,

    /// Display name for the guest.
    pub guest_name: String,

    /// Display phone number for the guest.
    pub phone_number: String,

    /// Whether the guest completed the login flow.
    is_logged_in: bool,

    /// Whether the menu is filtered to vegetarian items.
    is_veg_mode: bool,

    /// Editable profile details.
    pub profile: Profile,

    /// Order history, most recent first.
    orders: Vec<Order>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            table_number: String::new(),
            guest_count: 1,
            guest_name: String::from("Guest"),
            phone_number: String::new(),
            is_logged_in: false,
            is_veg_mode: false,
            profile: Profile::default(),
            orders: Vec::new(),
        }
    }
}

impl Session {
    /// Create a fresh, logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session pre-seeded with order history.
    #[must_use]
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }

    /// Record a completed login.
    ///
    /// Sets the table and identity fields and mirrors any provided name,
    /// phone and email into the profile, leaving absent fields untouched.
    pub fn login(
        &mut self,
        table_number: impl Into<String>,
        guest_count: u32,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) {
        self.table_number = table_number.into();
        self.guest_count = guest_count;
        self.guest_name = name.clone().unwrap_or_else(|| String::from("Guest"));
        self.phone_number = phone.clone().unwrap_or_default();

        if let Some(name) = name {
            self.profile.name = name;
        }
        if let Some(phone) = phone {
            self.profile.phone = phone;
        }
        if let Some(email) = email {
            self.profile.email = email;
        }

        self.is_logged_in = true;
    }

    /// Reset identity fields to their defaults and clear the logged-in flag.
    ///
    /// Profile details and order history survive, matching a guest logging
    /// back in at the same table later in the session.
    pub fn logout(&mut self) {
        self.table_number.clear();
        self.guest_count = 1;
        self.guest_name = String::from("Guest");
        self.phone_number.clear();
        self.is_logged_in = false;
    }

    /// Whether the guest completed the login flow.
    ///
    /// Consumers treat `false` as a guard against navigating into the main
    /// ordering flow.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Flip the vegetarian-only menu filter.
    pub fn toggle_veg_mode(&mut self) {
        self.is_veg_mode = !self.is_veg_mode;
    }

    /// Whether the menu is filtered to vegetarian items.
    #[must_use]
    pub fn is_veg_mode(&self) -> bool {
        self.is_veg_mode
    }

    /// Merge a partial profile edit, mirroring name and phone into the
    /// display identity.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.guest_name = name.clone();
            self.profile.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone_number = phone.clone();
            self.profile.phone = phone;
        }
        if let Some(email) = update.email {
            self.profile.email = email;
        }
        if let Some(date_of_birth) = update.date_of_birth {
            self.profile.date_of_birth = date_of_birth;
        }
    }

    /// Prepend an order to the history.
    pub fn add_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Rate a past order, clamping to 1–5. Unknown ids are a no-op.
    pub fn rate_order(&mut self, order_id: &str, rating: u8) {
        if let Some(order) = self.orders.iter_mut().find(|order| order.id == order_id) {
            order.rating = Some(rating.clamp(1, 5));
        }
    }

    /// Order history, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}
