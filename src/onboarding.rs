use log::debug;

use crate::error::{ReaderError, Result};

/// One page of the first-run walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub caption: &'static str,
    pub image: &'static str,
}

/// Walkthrough pages. The first one is the welcome page and carries no content.
pub static SLIDES: [Slide; 4] = [
    Slide {
        caption: "",
        image: "",
    },
    Slide {
        caption: "Multiple news sources. One reader.",
        image: "assets/img/News Article.png",
    },
    Slide {
        caption: "Customizable. Tons of options.",
        image: "assets/img/Customizing UI.png",
    },
    Slide {
        caption: "Many news sources to explore!",
        image: "assets/img/Explore News Sources.png",
    },
];

/// Outcome of moving forward through the tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStep {
    /// Now showing the slide at this index
    Showing(usize),
    /// The last slide was passed; the reader should open the home page
    Finished,
}

/// Navigation state of the onboarding walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnboardingTour {
    index: usize,
}

impl OnboardingTour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Slide {
        &SLIDES[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == SLIDES.len() - 1
    }

    /// Step back one slide, staying on the first slide.
    pub fn previous(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Step forward one slide; past the last slide the tour is finished.
    pub fn next(&mut self) -> TourStep {
        if self.is_last() {
            debug!("Onboarding finished");
            TourStep::Finished
        } else {
            self.index += 1;
            TourStep::Showing(self.index)
        }
    }

    /// Jump straight to a slide.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= SLIDES.len() {
            return Err(ReaderError::onboarding(format!(
                "slide {} does not exist (expected 0-{})",
                index,
                SLIDES.len() - 1
            )));
        }
        self.index = index;
        Ok(())
    }
}
