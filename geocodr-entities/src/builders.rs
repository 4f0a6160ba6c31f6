pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_row_builder::*;

pub mod address_row_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressRowBuild {
        row: AddressRow,
    }

    impl AddressRowBuild {
        pub fn name(mut self, x: &str) -> Self {
            self.row.name = Some(x.into());
            self
        }
        pub fn address(mut self, x: &str) -> Self {
            self.row.address = x.into();
            self
        }
        pub fn finish(self) -> AddressRow {
            self.row
        }
    }

    impl Builder for AddressRow {
        type Build = AddressRowBuild;
        fn build() -> Self::Build {
            AddressRowBuild {
                row: AddressRow::default(),
            }
        }
    }
}
