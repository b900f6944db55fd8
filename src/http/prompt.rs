use crate::mood::Mood;

pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert AI music prompt engineer and professional songwriter.
Your task is to generate:
1. A highly detailed, professional English music prompt for tools like Suno/Udio. Include genre, tempo, instruments, and atmosphere.
2. Meaningful song lyrics (Verse and Chorus) that match the mood and the music prompt.

Output must be in JSON format.";

pub fn user_instruction(mood: Mood) -> String {
    format!(
        "Generate a music prompt and matching lyrics for the mood: {}. The prompt and lyrics must be in English.",
        mood.as_str()
    )
}
