//! Landing-page copy.

pub const TAGLINE: &str = "Where Every Cup Tells a Story";
pub const BLURB: &str =
    "Experience the finest coffee and authentic Filipino cuisine in a cozy atmosphere";
pub const CALL_TO_ACTION: &str = "Explore Menu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub headline: String,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub call_to_action: &'static str,
}

impl Hero {
    pub fn new(cafe_name: &str) -> Self {
        Self {
            headline: format!("Welcome to {}", cafe_name),
            tagline: TAGLINE,
            blurb: BLURB,
            call_to_action: CALL_TO_ACTION,
        }
    }
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "{}", self.tagline)?;
        writeln!(f, "{}", self.blurb)?;
        write!(f, "[ {} ]", self.call_to_action)
    }
}
