//! Grain record metadata: type codes, sensitivity flags, required fields.

/// Field every grain must carry: the type tag.
pub const FIELD_TYPE: &str = "type";
/// Field every grain must carry: the namespace string.
pub const FIELD_NAMESPACE: &str = "namespace";
/// Millisecond epoch timestamp; feeds the header's seconds field.
pub const FIELD_CREATED_AT: &str = "created_at";

/// Grain type wire codes (OMS §8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GrainType {
    Fact = 0x01,
    Episode = 0x02,
    Checkpoint = 0x03,
    Workflow = 0x04,
    ToolCall = 0x05,
    Observation = 0x06,
    Goal = 0x07,
}

impl GrainType {
    /// Creates a GrainType from its wire code.
    pub fn from_u8(v: u8) -> Option<GrainType> {
        match v {
            0x01 => Some(GrainType::Fact),
            0x02 => Some(GrainType::Episode),
            0x03 => Some(GrainType::Checkpoint),
            0x04 => Some(GrainType::Workflow),
            0x05 => Some(GrainType::ToolCall),
            0x06 => Some(GrainType::Observation),
            0x07 => Some(GrainType::Goal),
            _ => None,
        }
    }

    /// Creates a GrainType from the `type` field's string tag.
    pub fn from_tag(tag: &str) -> Option<GrainType> {
        match tag {
            "fact" => Some(GrainType::Fact),
            "episode" => Some(GrainType::Episode),
            "checkpoint" => Some(GrainType::Checkpoint),
            "workflow" => Some(GrainType::Workflow),
            "tool_call" => Some(GrainType::ToolCall),
            "observation" => Some(GrainType::Observation),
            "goal" => Some(GrainType::Goal),
            _ => None,
        }
    }

    /// Returns the wire code carried in header byte 2.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the string tag used in the record's `type` field.
    pub fn tag(self) -> &'static str {
        match self {
            GrainType::Fact => "fact",
            GrainType::Episode => "episode",
            GrainType::Checkpoint => "checkpoint",
            GrainType::Workflow => "workflow",
            GrainType::ToolCall => "tool_call",
            GrainType::Observation => "observation",
            GrainType::Goal => "goal",
        }
    }
}

/// Sensitivity class carried in bits 6–7 of the header flags byte
/// (OMS §23). Bits 0–5 are reserved for signing/encryption indicators
/// and are zero in v1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Sensitivity {
    #[default]
    Public = 0b00,
    Internal = 0b01,
    Pii = 0b10,
    Phi = 0b11,
}

impl Sensitivity {
    /// Decodes the sensitivity class from a flags byte.
    pub fn from_flags(flags: u8) -> Sensitivity {
        match (flags >> 6) & 0b11 {
            0b00 => Sensitivity::Public,
            0b01 => Sensitivity::Internal,
            0b10 => Sensitivity::Pii,
            _ => Sensitivity::Phi,
        }
    }

    /// Packs the class into a flags byte with all reserved bits zero.
    pub fn flags_byte(self) -> u8 {
        (self as u8) << 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grain_type_codes() {
        assert_eq!(GrainType::Fact.code(), 0x01);
        assert_eq!(GrainType::Observation.code(), 0x06);
        assert_eq!(GrainType::Goal.code(), 0x07);

        for code in 0x01..=0x07u8 {
            let gt = GrainType::from_u8(code).unwrap();
            assert_eq!(gt.code(), code);
        }
        assert_eq!(GrainType::from_u8(0x00), None);
        assert_eq!(GrainType::from_u8(0x08), None);
    }

    #[test]
    fn test_grain_type_tag_roundtrip() {
        for code in 0x01..=0x07u8 {
            let gt = GrainType::from_u8(code).unwrap();
            assert_eq!(GrainType::from_tag(gt.tag()), Some(gt));
        }
        assert_eq!(GrainType::from_tag("belief"), None);
    }

    #[test]
    fn test_sensitivity_flags() {
        assert_eq!(Sensitivity::Public.flags_byte(), 0x00);
        assert_eq!(Sensitivity::Internal.flags_byte(), 0x40);
        assert_eq!(Sensitivity::Pii.flags_byte(), 0x80);
        assert_eq!(Sensitivity::Phi.flags_byte(), 0xC0);

        for s in [
            Sensitivity::Public,
            Sensitivity::Internal,
            Sensitivity::Pii,
            Sensitivity::Phi,
        ] {
            assert_eq!(Sensitivity::from_flags(s.flags_byte()), s);
        }
        // Reserved bits do not disturb the class.
        assert_eq!(Sensitivity::from_flags(0b1000_0001), Sensitivity::Pii);
    }
}
