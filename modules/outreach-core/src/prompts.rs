//! Static instruction blocks attached to every composed response.
//!
//! A deployment picks one variant in its config file. Each variant carries,
//! per platform, one instruction sentence, one context sentence and an ordered
//! list of stylistic requirements that always includes a character ceiling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptVariant {
    #[default]
    HilariousIceBreaker,
    WittyConversationStarter,
    CoolConfident,
}

/// Instruction payload for one (variant, platform) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSet {
    pub agent_instruction: &'static str,
    pub context: &'static str,
    pub requirements: &'static [&'static str],
}

impl PromptVariant {
    pub const ALL: [PromptVariant; 3] = [
        PromptVariant::HilariousIceBreaker,
        PromptVariant::WittyConversationStarter,
        PromptVariant::CoolConfident,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PromptVariant::HilariousIceBreaker => "hilarious-ice-breaker",
            PromptVariant::WittyConversationStarter => "witty-conversation-starter",
            PromptVariant::CoolConfident => "cool-confident",
        }
    }

    pub fn prompts(self, platform: Platform) -> PromptSet {
        match (self, platform) {
            (PromptVariant::HilariousIceBreaker, Platform::Twitter) => HILARIOUS_TWITTER,
            (PromptVariant::HilariousIceBreaker, Platform::LinkedIn) => HILARIOUS_LINKEDIN,
            (PromptVariant::WittyConversationStarter, Platform::Twitter) => WITTY_TWITTER,
            (PromptVariant::WittyConversationStarter, Platform::LinkedIn) => WITTY_LINKEDIN,
            (PromptVariant::CoolConfident, Platform::Twitter) => COOL_TWITTER,
            (PromptVariant::CoolConfident, Platform::LinkedIn) => COOL_LINKEDIN,
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PromptVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = PromptVariant::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown prompt variant '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

// ---------------------------------------------------------------------------
// Hilarious ice-breaker
// ---------------------------------------------------------------------------

const HILARIOUS_TWITTER: PromptSet = PromptSet {
    agent_instruction: "Based on the tweet above, generate a HILARIOUS, playful, and attention-grabbing message that will make this person stop scrolling and laugh out loud. Be bold, creative, and memorable!",
    context: "You are creating an ice-breaker that breaks through the noise of boring DMs. This person gets hundreds of messages - yours needs to STAND OUT and be genuinely entertaining.",
    requirements: &[
        "Be genuinely funny and playful (not corporate funny)",
        "Reference specific details from their tweet in a clever/unexpected way",
        "Use humor, wordplay, memes, or surprising angles",
        "Be bold and attention-grabbing (but not offensive)",
        "Keep it under 280 characters",
        "Make them want to respond because it's actually entertaining",
        "Think 'would I screenshot this and send it to friends?' level of wit",
    ],
};

const HILARIOUS_LINKEDIN: PromptSet = PromptSet {
    agent_instruction: "Based on the LinkedIn post above, generate a playful, witty, and memorable message that stands out from boring LinkedIn spam. Be professional enough for LinkedIn but fun enough to get their attention and make them smile!",
    context: "You are creating a LinkedIn message that breaks through the sea of generic connection requests. This person gets tons of boring 'I'd like to add you to my network' messages - yours should make them chuckle and actually want to connect.",
    requirements: &[
        "Be genuinely witty and playful (not stiff corporate speak)",
        "Reference specific details from their post with humor or clever insights",
        "Use light humor, wordplay, or unexpected perspectives",
        "Professional enough for LinkedIn, fun enough to be memorable",
        "Keep it concise (under 300 characters for connection request)",
        "Make them curious about who you are and want to respond",
        "Think 'finally, someone who actually read my post and has personality' vibe",
    ],
};

// ---------------------------------------------------------------------------
// Witty conversation-starter
// ---------------------------------------------------------------------------

const WITTY_TWITTER: PromptSet = PromptSet {
    agent_instruction: "Based on the tweet above, write a witty conversation-starter that picks up on what they said and invites a reply.",
    context: "You are opening a real conversation with someone you have never talked to. A sharp, specific observation beats a generic compliment every time.",
    requirements: &[
        "Reference one concrete detail from their tweet",
        "Add a clever angle or light twist instead of just agreeing",
        "End with something easy to reply to",
        "Sound like a person, not a brand",
        "Keep it under 280 characters",
    ],
};

const WITTY_LINKEDIN: PromptSet = PromptSet {
    agent_instruction: "Based on the LinkedIn post above, write a witty conversation-starter that shows you actually read it and gives them a reason to reply.",
    context: "You are reaching out on LinkedIn where most messages are templated pitches. A thoughtful, slightly playful take on their post is what gets answered.",
    requirements: &[
        "Reference one specific point from their post",
        "Offer a smart observation or a light, good-natured joke",
        "Stay professional without sounding stiff",
        "Do not pitch anything",
        "End with an open question",
        "Keep it under 300 characters",
    ],
};

// ---------------------------------------------------------------------------
// Cool / confident
// ---------------------------------------------------------------------------

const COOL_TWITTER: PromptSet = PromptSet {
    agent_instruction: "Based on the tweet above, write a cool, confident message that reads like it came from a peer, not a fan.",
    context: "You are reaching out as an equal. Confidence and brevity signal that your time is valuable too.",
    requirements: &[
        "Be relaxed and self-assured, never needy",
        "Reference their tweet directly",
        "Skip flattery and filler",
        "One or two short sentences",
        "Keep it under 280 characters",
    ],
};

const COOL_LINKEDIN: PromptSet = PromptSet {
    agent_instruction: "Based on the LinkedIn post above, write a cool, confident connection message that treats them as a peer.",
    context: "You are connecting with a professional who is used to deferential outreach. A calm, direct note that engages with their post stands out.",
    requirements: &[
        "Be direct and self-assured",
        "Reference their post specifically",
        "No flattery, no buzzwords",
        "Make the reason to connect obvious",
        "Keep it under 300 characters",
    ],
};
