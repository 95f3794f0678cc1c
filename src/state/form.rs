//! Form presentation state types.

/// Specifying which modal form, if any, is open over the current view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ActiveModal {
    NewApiary,
    NewHarvest,
    NewInspection,
}

impl ActiveModal {
    pub fn title(&self) -> &'static str {
        match self {
            ActiveModal::NewApiary => "New Apiary",
            ActiveModal::NewHarvest => "New Harvest",
            ActiveModal::NewInspection => "New Inspection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_titles() {
        assert_eq!(ActiveModal::NewApiary.title(), "New Apiary");
        assert_eq!(ActiveModal::NewHarvest.title(), "New Harvest");
        assert_eq!(ActiveModal::NewInspection.title(), "New Inspection");
    }
}
