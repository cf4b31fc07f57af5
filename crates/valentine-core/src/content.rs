//! Page text shown around the scene.
//!
//! The first rejection message is the resting label of the negative control;
//! every later entry is a plea shown after the visitor tries to say no.

use crate::interaction::Phase;

pub const REJECTION_MESSAGES: &[&str] = &[
    "No 🙃",
    "Are you sure? 🥲",
    "Pwease? 👉👈",
    "My heart practiced for this! 💔",
    "I'll give you unlimited hugs! 🧸",
    "Pretty please? 🥺",
    "Error: 'No' is not an option! 😉",
    "We'd be the cutest pair! ✨",
];

pub const YES_LABEL: &str = "Yes 💖";

pub const WHOLESOME_REASONS: [&str; 5] = [
    "You make every day brighter ☀️",
    "Your smile is my favorite view 😊",
    "You're the 'sweet' in my life 🍬",
    "I feel lucky just knowing you 🍀",
    "You're a literal masterpiece 🎨",
];

pub const LETTER_HEADING: &str = "To My Dear Valentine...";
pub const LETTER_OPENING: &str = "You’ve just made me the luckiest person in the world! 🌎";
pub const LETTER_BODY: &str =
    "In this garden of life, you're the most beautiful flower. Here's why you're so special:";
pub const LETTER_SIGN_OFF: &str = "\"Forever yours, with all my heart. 💌\"";

#[inline]
pub fn title(phase: Phase) -> &'static str {
    match phase {
        Phase::Asking => "Will You Be My Valentine?",
        Phase::Accepted => "It's a Yes! ❤️",
    }
}

#[inline]
pub fn subtitle(phase: Phase) -> &'static str {
    match phase {
        Phase::Asking => "Welcome to our heart garden",
        Phase::Accepted => "My dream come true",
    }
}
