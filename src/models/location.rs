use serde::{Deserialize, Serialize};

use crate::utils::fountain_constants::{LOCATION_TIME_SPLIT, SCENE_HEADING_PARTS};

/// 场景地点信息，从场景标题解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub interior: bool,
    pub exterior: bool,
    pub time_of_day: String,
}

impl Location {
    pub fn new(
        name: String,
        interior: bool,
        exterior: bool,
        time_of_day: String
    ) -> Self {
        Location {
            name,
            interior,
            exterior,
            time_of_day,
        }
    }

    /// 解析场景位置信息
    ///
    /// `INT. HOUSE - DAY` -> 内景, 地点 `HOUSE`, 时间 `DAY`
    pub fn from_scene_heading(scene_heading: &str) -> Option<Location> {
        let caps = SCENE_HEADING_PARTS.captures(scene_heading)?;
        let prefix = caps.get(1)?.as_str();
        let rest = caps.get(2)?.as_str();

        let mut i = prefix.contains('I');
        let mut e = prefix.contains("EX") || prefix.contains("/E");

        let split = LOCATION_TIME_SPLIT.captures(rest);
        let mut n = match &split {
            Some(parts) => parts.get(1)?.as_str().trim().to_string(),
            None => rest.trim().to_string(),
        };

        // 中文场景标记
        for (marker, interior, exterior) in [
            ("(内外景)", true, true),
            ("（内外景）", true, true),
            ("(内景)", true, false),
            ("（内景）", true, false),
            ("(外景)", false, true),
            ("（外景）", false, true),
        ] {
            if let Some(stripped) = n.strip_prefix(marker) {
                n = stripped.trim().to_string();
                i |= interior;
                e |= exterior;
                break;
            }
        }

        let day_t = split
            .as_ref()
            .and_then(|parts| parts.get(2))
            .map(|m| m.as_str().trim())
            .unwrap_or("");

        Some(Location::new(normalize(&n), i, e, normalize(day_t)))
    }
}

// 标准化地点名称: 大写，空白统一为空格
fn normalize(text: &str) -> String {
    text.to_uppercase().replace(|c: char| c.is_whitespace(), " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("INT. KITCHEN - DAY", "KITCHEN", true, false, "DAY")]
    #[case("EXT. PARK - NIGHT", "PARK", false, true, "NIGHT")]
    #[case("INT./EXT. CAR - DAY", "CAR", true, true, "DAY")]
    #[case("I/E. LOBBY - DAY", "LOBBY", true, true, "DAY")]
    #[case("!INT. SHED - DAWN", "SHED", true, false, "DAWN")]
    #[case("EXT. ROOFTOP", "ROOFTOP", false, true, "")]
    #[case("INT. (内外景) 公园一角 - 傍晚", "公园一角", true, true, "傍晚")]
    fn test_from_scene_heading(
        #[case] heading: &str,
        #[case] name: &str,
        #[case] interior: bool,
        #[case] exterior: bool,
        #[case] time: &str,
    ) {
        let location = Location::from_scene_heading(heading).unwrap();
        assert_eq!(location.name, name);
        assert_eq!(location.interior, interior);
        assert_eq!(location.exterior, exterior);
        assert_eq!(location.time_of_day, time);
    }

    #[test]
    fn test_not_a_scene_heading() {
        assert_eq!(Location::from_scene_heading("She walks in."), None);
    }
}
