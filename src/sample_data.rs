//! Built-in sample conversation.

use crate::message::Message;

const AUTHOR: &str = "Neide";

/// Build the sample conversation.
///
/// Pure and deterministic: every call returns the same 13 messages in the
/// same order. The caller owns the returned vector.
pub fn conversation() -> Vec<Message> {
    [
        "Test...Test...Test...",
        "List of Android versions:\n\
         Android KitKat (API 19)\n\
         Android Lollipop (API 21)\n\
         Android Marshmallow (API 23)\n\
         Android Nougat (API 24)\n\
         Android Oreo (API 26)\n\
         Android Pie (API 28)\n\
         Android 10 (API 29)\n\
         Android 11 (API 30)\n\
         Android 12 (API 31)\n",
        "I think Kotlin is my favorite programming language.\n\
         It's so much fun!",
        "Searching for alternatives to XML layouts...",
        "Hey, take a look at Jetpack Compose, it's great!\n\
         It's the Android's modern toolkit for building native UI.\
         It simplifies and accelerates UI development on Android.\
         Less code, powerful tools, and intuitive Kotlin APIs :)",
        "It's available from API 21+ :)",
        "Writing Kotlin for UI seems so natural, Compose where have you been all my life?",
        "Android Studio next version's name is Arctic Fox",
        "Android Studio Arctic Fox tooling for Compose is top notch ^_^",
        "I didn't know you can now run the emulator directly from Android Studio",
        "Compose Previews are great to check quickly how a composable layout looks like",
        "Previews are also interactive after enabling the experimental setting",
        "Have you tried writing build.gradle with KTS?",
    ]
    .into_iter()
    .map(|body| Message::new(AUTHOR, body))
    .collect()
}
