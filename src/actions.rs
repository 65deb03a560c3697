//! Commands emitted by rendered elements and the page state they drive.

use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::accordion::Accordion;
use crate::content::{ContentStore, MediaItem};
use crate::error::LandingError;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    PlayTrailer(String),
    ShowInfo(u32),
    CloseModal,
    ToggleFaq(usize),
    ChoosePlan(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::PlayTrailer(_) => "play-trailer",
            Action::ShowInfo(_) => "show-info",
            Action::CloseModal => "close-modal",
            Action::ToggleFaq(_) => "toggle-faq",
            Action::ChoosePlan(_) => "choose-plan",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub content: Rc<ContentStore>,
    pub accordion: Accordion,
    pub modal: Option<MediaItem>,
}

impl PageState {
    pub fn new(content: Rc<ContentStore>) -> Self {
        let accordion = Accordion::new(&content.faq);
        Self {
            content,
            accordion,
            modal: None,
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<(), LandingError> {
        match action {
            Action::ShowInfo(id) => {
                let movie = self.content.movie(id).ok_or(LandingError::UnknownMovie(id))?;
                self.modal = Some(movie.clone());
            }
            Action::CloseModal => self.modal = None,
            Action::ToggleFaq(index) => self.accordion.toggle(index)?,
            Action::PlayTrailer(_) | Action::ChoosePlan(_) => {}
        }
        Ok(())
    }
}

impl Reducible for PageState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let name = action.name();
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(()) => {
                debug!("Applied {} (open faq entry: {:?})", name, next.accordion.open_index());
                Rc::new(next)
            }
            Err(e) => {
                warn!("Rejected {}: {}", name, e);
                self
            }
        }
    }
}

/// Handed to every section renderer in place of global DOM handles.
#[derive(Clone, PartialEq)]
pub struct PageContext {
    pub dispatch: Callback<Action>,
}
