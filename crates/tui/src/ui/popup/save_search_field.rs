//! Focus targets inside the save-search dialog.

/// Field selection for save-search dialog navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalField {
    /// Search name text input
    #[default]
    Name,
    /// Save button
    Save,
    /// Cancel button
    Cancel,
}

impl ModalField {
    /// Get the next field (cycles through all fields).
    pub fn next(self) -> Self {
        match self {
            ModalField::Name => ModalField::Save,
            ModalField::Save => ModalField::Cancel,
            ModalField::Cancel => ModalField::Name,
        }
    }

    /// Get the previous field (cycles through all fields).
    pub fn previous(self) -> Self {
        match self {
            ModalField::Name => ModalField::Cancel,
            ModalField::Save => ModalField::Name,
            ModalField::Cancel => ModalField::Save,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles() {
        assert_eq!(ModalField::Name.next(), ModalField::Save);
        assert_eq!(ModalField::Save.next(), ModalField::Cancel);
        assert_eq!(ModalField::Cancel.next(), ModalField::Name);
    }

    #[test]
    fn test_previous_inverts_next() {
        for field in [ModalField::Name, ModalField::Save, ModalField::Cancel] {
            assert_eq!(field.next().previous(), field);
        }
    }
}
