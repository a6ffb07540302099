// ABOUTME: Age-predicted maximum heart rate and three training zones
// ABOUTME: Fox formula (220 - age) with zone edges computed in integer arithmetic

use crate::physiological_constants::heart_rate;
use serde::{Deserialize, Serialize};

/// A training zone as a half-open bpm range `[min_bpm, max_bpm)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZone {
    /// Lower edge (bpm)
    pub min_bpm: i32,
    /// Upper edge (bpm)
    pub max_bpm: i32,
    /// Lower edge as percent of max HR
    pub min_percent: i32,
    /// Upper edge as percent of max HR
    pub max_percent: i32,
}

impl HeartRateZone {
    fn between(max_hr: i32, min_percent: i32, max_percent: i32) -> Self {
        Self {
            min_bpm: percent_of(max_hr, min_percent),
            max_bpm: percent_of(max_hr, max_percent),
            min_percent,
            max_percent,
        }
    }
}

/// Structured heart-rate zone result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZones {
    /// Age in years
    pub age: i32,
    /// Estimated maximum heart rate (bpm)
    pub max_hr: i32,
    /// 60-70% of max
    pub fat_burn: HeartRateZone,
    /// 70-85% of max
    pub cardio: HeartRateZone,
    /// 85-95% of max
    pub peak: HeartRateZone,
}

// Truncates toward zero, so 70% of 180 is exactly 126.
const fn percent_of(max_hr: i32, percent: i32) -> i32 {
    max_hr.saturating_mul(percent) / 100
}

/// Maximum heart rate and training zones for an age
#[must_use]
pub fn calculate_heart_rate_zones(age: i32) -> HeartRateZones {
    let max_hr = heart_rate::FOX_BASE_BPM.saturating_sub(age);

    HeartRateZones {
        age,
        max_hr,
        fat_burn: HeartRateZone::between(
            max_hr,
            heart_rate::FAT_BURN_LOWER_PERCENT,
            heart_rate::CARDIO_LOWER_PERCENT,
        ),
        cardio: HeartRateZone::between(
            max_hr,
            heart_rate::CARDIO_LOWER_PERCENT,
            heart_rate::PEAK_LOWER_PERCENT,
        ),
        peak: HeartRateZone::between(
            max_hr,
            heart_rate::PEAK_LOWER_PERCENT,
            heart_rate::PEAK_UPPER_PERCENT,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_forty_zones() {
        let zones = calculate_heart_rate_zones(40);
        assert_eq!(zones.max_hr, 180);
        assert_eq!((zones.fat_burn.min_bpm, zones.fat_burn.max_bpm), (108, 126));
        assert_eq!((zones.cardio.min_bpm, zones.cardio.max_bpm), (126, 153));
        assert_eq!((zones.peak.min_bpm, zones.peak.max_bpm), (153, 171));
    }

    #[test]
    fn test_edges_truncate() {
        let zones = calculate_heart_rate_zones(33);
        assert_eq!(zones.max_hr, 187);
        // 187 * 0.6 = 112.2, 187 * 0.85 = 158.95, 187 * 0.95 = 177.65
        assert_eq!(zones.fat_burn.min_bpm, 112);
        assert_eq!(zones.cardio.max_bpm, 158);
        assert_eq!(zones.peak.max_bpm, 177);
    }

    #[test]
    fn test_zones_are_contiguous() {
        for age in 10..90 {
            let zones = calculate_heart_rate_zones(age);
            assert_eq!(zones.fat_burn.max_bpm, zones.cardio.min_bpm);
            assert_eq!(zones.cardio.max_bpm, zones.peak.min_bpm);
            assert!(zones.peak.max_bpm < zones.max_hr);
        }
    }

    #[test]
    fn test_unvalidated_ages_do_not_panic() {
        assert_eq!(calculate_heart_rate_zones(250).max_hr, -30);
        assert_eq!(calculate_heart_rate_zones(i32::MIN).max_hr, i32::MAX);
    }
}
