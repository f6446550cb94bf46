//! Month/day selection for the date search controls.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Transient month/day pair rebuilt from the two select controls.
///
/// Changing the month clears the day because the day list is repopulated
/// from scratch for the new month's length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateSelection {
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl DateSelection {
    /// Record a month change; any previously selected day is discarded.
    pub fn set_month(&mut self, month: Option<u8>) {
        self.month = month;
        self.day = None;
    }

    pub fn set_day(&mut self, day: Option<u8>) {
        self.day = day;
    }

    /// Both controls hold a value; the search action is enabled.
    pub fn is_complete(self) -> bool {
        self.complete().is_some()
    }

    /// The (month, day) pair when both are selected.
    pub fn complete(self) -> Option<(u8, u8)> {
        Some((self.month?, self.day?))
    }
}
