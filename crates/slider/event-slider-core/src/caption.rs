//! Caption data and slide-to-caption lookup.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub title: String,
    pub text: String,
}

impl Caption {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Ordered caption list. Its length is independent of the slide count:
/// slide `i` shows caption `i mod len`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptionDeck {
    items: Vec<Caption>,
}

impl CaptionDeck {
    pub fn new(items: Vec<Caption>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Caption for slide `index`, or `None` when the deck is empty.
    pub fn for_slide(&self, index: usize) -> Option<&Caption> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(index % self.items.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Caption> {
        self.items.iter()
    }

    /// The seasonal event captions shipped with the landing page.
    pub fn builtin() -> Self {
        Self::new(vec![
            Caption::new(
                "Valentine Chocolate Festival",
                "Perayaan spesial penuh cokelat premium dan hadiah romantis.",
            ),
            Caption::new(
                "Merry Christmas Choco Parade",
                "Nikmati cokelat klasik dan edisi terbatas bertema natal.",
            ),
            Caption::new(
                "Happy Halloween Dark Choco Night",
                "Kemasan Halloween dengan rasa dark-choco khas dan aroma rempah.",
            ),
            Caption::new(
                "Golden Gift Box Edition",
                "Kotak hadiah cokelat emas premium, cocok untuk orang spesial.",
            ),
            Caption::new(
                "Spooky Gift Halloween Edition",
                "Koleksi cokelat Halloween paling eksklusif dan misterius.",
            ),
        ])
    }
}

impl From<Vec<Caption>> for CaptionDeck {
    fn from(items: Vec<Caption>) -> Self {
        Self::new(items)
    }
}
