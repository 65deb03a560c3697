use crate::content::FaqEntry;
use crate::error::LandingError;

/// Open/closed state of the rendered FAQ entries, indexed by position.
/// At most one entry is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    pub fn new(entries: &[FaqEntry]) -> Self {
        let mut accordion = Self::default();
        accordion.render(entries);
        accordion
    }

    /// Starts over with one closed entry per item in `entries`.
    pub fn render(&mut self, entries: &[FaqEntry]) {
        self.open = vec![false; entries.len()];
    }

    /// Closes every entry, then reopens `index` unless it was the open one.
    pub fn toggle(&mut self, index: usize) -> Result<(), LandingError> {
        let was_open = *self.open.get(index).ok_or(LandingError::OutOfRange {
            index,
            len: self.open.len(),
        })?;

        self.open.iter_mut().for_each(|open| *open = false);
        if !was_open {
            self.open[index] = true;
        }
        Ok(())
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|open| *open)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

/// Inline style for an answer region. `content_height` is the region's
/// natural height; when it could not be measured an open region grows to fit.
pub fn answer_style(open: bool, content_height: Option<i32>) -> String {
    match (open, content_height) {
        (false, _) => "height: 0px;".to_string(),
        (true, Some(height)) => format!("height: {}px;", height),
        (true, None) => "height: auto;".to_string(),
    }
}
