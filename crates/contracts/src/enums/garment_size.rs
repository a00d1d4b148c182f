use serde::{Deserialize, Serialize};

/// Garment sizes available for stock entry.
///
/// The set is closed and identically ordered for every clothes variant;
/// stock arrays are always one entry per size, in `ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GarmentSize {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl GarmentSize {
    /// Every size, in display and storage order
    pub const ALL: [GarmentSize; 6] = [
        GarmentSize::Xs,
        GarmentSize::S,
        GarmentSize::M,
        GarmentSize::L,
        GarmentSize::Xl,
        GarmentSize::Xxl,
    ];

    /// Stable code used on the wire and in the database
    pub fn code(&self) -> &'static str {
        match self {
            GarmentSize::Xs => "xs",
            GarmentSize::S => "s",
            GarmentSize::M => "m",
            GarmentSize::L => "l",
            GarmentSize::Xl => "xl",
            GarmentSize::Xxl => "xxl",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "xs" => Some(GarmentSize::Xs),
            "s" => Some(GarmentSize::S),
            "m" => Some(GarmentSize::M),
            "l" => Some(GarmentSize::L),
            "xl" => Some(GarmentSize::Xl),
            "xxl" => Some(GarmentSize::Xxl),
            _ => None,
        }
    }
}

impl std::fmt::Display for GarmentSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_smallest_to_largest() {
        let codes: Vec<&str> = GarmentSize::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec!["xs", "s", "m", "l", "xl", "xxl"]);
    }

    #[test]
    fn codes_parse_back() {
        for size in GarmentSize::ALL {
            assert_eq!(GarmentSize::from_code(size.code()), Some(size));
        }
        assert_eq!(GarmentSize::from_code("xxxl"), None);
    }
}
