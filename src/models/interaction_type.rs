use serde::Serialize;

/// Closed vocabulary of interaction kinds. Stored in the DB by slug.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum InteractionType {
    Email,
    VideoCall,
    InPerson,
    PhoneCall,
}

impl InteractionType {
    pub const ALL: [InteractionType; 4] = [
        InteractionType::Email,
        InteractionType::VideoCall,
        InteractionType::InPerson,
        InteractionType::PhoneCall,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            InteractionType::Email => "email",
            InteractionType::VideoCall => "video_call",
            InteractionType::InPerson => "in_person",
            InteractionType::PhoneCall => "phone_call",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "email" => Some(InteractionType::Email),
            "video_call" => Some(InteractionType::VideoCall),
            "in_person" => Some(InteractionType::InPerson),
            "phone_call" => Some(InteractionType::PhoneCall),
            _ => None,
        }
    }

    /// Human label for badges: slug with underscores replaced and words capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionType::Email => "Email",
            InteractionType::VideoCall => "Video Call",
            InteractionType::InPerson => "In Person",
            InteractionType::PhoneCall => "Phone Call",
        }
    }
}
