//! Offline generator with fixed answers.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::generator::{Generation, Generator};

const PHOTOSYNTHESIS_ANSWER: &str = r#"Arre! Photosynthesis toh ekdum simple hai! 🌱

Socho tumhare ghar ke tulsi plant ko - wo poora din dhoop mein khada rehta hai na? Wo actually apna khana bana raha hota hai sunlight se! 🌞

**Process kya hai:**
1. Plant ke leaves mein chlorophyll hai (green colour)
2. Ye sunlight ko absorb karta hai
3. Plus paani (from roots) + CO2 (from air)
4. = Glucose ban jata hai (plant ka food!) + O2 ✨

**Fun Fact:** Tum jo oxygen le rahe ho, wo isi process ki wajah se milti hai! Plants literally hamari life support system hain! 💚

🎯 **Quick Activity:** Apni balcony/window pe ek plant rakho for 2 days - ek dhoop mein, ek andar dark mein. Guess what? Dhoop wala zyada green aur healthy rahega!

Ab batao - agar plant ko sunlight nahi mile toh kya hoga? Try karo explain karna! 🤔"#;

const BLUE_SKY_ANSWER: &str = r#"Arre wah! Super interesting question! 🌤️

**Sky blue kyun hai?** Let me explain with a cool example!

Socho jab tum cricket ball ko wall pe maro - ball bounce back hoti hai na? Same way, sunlight bhi atmosphere mein bounce karti hai!

**Science behind it:**
- Sunlight mein rainbow ke saare colors hain 🌈
- Blue light ki wavelength choti hoti hai
- Choti wavelength = zyada bouncing/scattering!
- Isliye blue color sabse zyada scatter hota hai atmosphere mein
- That's why sky blue dikhti hai! ✨

**Mind-Blowing Fact:** Mars pe sky RED dikhti hai! Kyunki wahan atmosphere alag hai. Kya tum imagine kar sakte ho red sky? 🔴

**Challenge for you:** Evening ko sunset dekho - sky orange/red kyun ho jati hai? Hint hai: Sunlight zyada distance travel karti hai! 🤔

Samjh aaya? Koi aur doubt ho toh pooch lo! 🙌"#;

const GENERIC_ANSWER: &str = r#"Great question! Let me explain this in a simple and fun way! 🎯

This is a fascinating topic that connects to your daily life. Let me break it down step-by-step so it's super clear.

**The Main Idea:**
[Simplified explanation of the concept]

**Real-Life Example:**
Think of it like [relatable Indian context - chai, cricket, school, etc.]

**Why This Matters:**
This concept is important because it helps you understand [practical application]

**Fun Challenge:** Try to explain this to a friend or family member! Teaching is the best way to learn. 💪

Got it? Want me to explain any part in more detail? I'm here to help! 🌟"#;

/// Configuration for the canned generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Token count reported for every canned answer.
    pub canned_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { canned_tokens: 500 }
    }
}

/// Generator that answers from a small set of fixed texts.
///
/// Used when no model backend is wired in, and in tests.
#[derive(Debug, Clone, Default)]
pub struct CannedGenerator {
    config: GenerationConfig,
}

impl CannedGenerator {
    /// Create a canned generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canned generator with the given configuration.
    pub fn with_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Pick the answer for a prompt.
    pub fn answer_for(prompt: &str) -> &'static str {
        let lowered = prompt.to_lowercase();
        if lowered.contains("photosynthesis") {
            PHOTOSYNTHESIS_ANSWER
        } else if lowered.contains("sky") && lowered.contains("blue") {
            BLUE_SKY_ANSWER
        } else {
            GENERIC_ANSWER
        }
    }
}

impl Generator for CannedGenerator {
    fn generate(&self, prompt: &str) -> Result<Generation> {
        let start = Instant::now();
        let text = Self::answer_for(prompt).to_string();
        debug!("canned generator answered a {}-byte prompt", prompt.len());
        Ok(Generation {
            text,
            tokens_used: self.config.canned_tokens,
            elapsed: start.elapsed(),
        })
    }

    fn name(&self) -> &str {
        "canned"
    }
}
