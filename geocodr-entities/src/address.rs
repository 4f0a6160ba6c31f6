/// A single address to resolve, optionally labeled with a name.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRow {
    pub name    : Option<String>,
    pub address : String,
}

impl AddressRow {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            name: None,
            address: address.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// A row without a (non-blank) address cannot be resolved.
    pub fn is_valid(&self) -> bool {
        !self.address.trim().is_empty()
    }
}
