//! Checkout Data

/// Customer details submitted with a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

impl CustomerInfo {
    /// Trim every field, dropping a blank address.
    ///
    /// Returns `None` when the name or email is blank.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() {
            return None;
        }

        let address = self
            .address
            .map(|address| address.trim().to_string())
            .filter(|address| !address.is_empty());

        Some(Self {
            name: name.to_string(),
            email: email.to_string(),
            address,
        })
    }
}
