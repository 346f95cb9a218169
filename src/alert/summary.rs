//! Spoken summary of a sighting

use super::record::ShipRecord;

/// Course rounded to a whole degree in 0..360
pub fn course_phrase(course: f64) -> String {
    let degrees = (course.round() as i64).rem_euclid(360);
    format!("course {} degrees", degrees)
}

/// Whole speeds are spoken without a fraction, others to one decimal
pub fn speed_phrase(speed: f64) -> String {
    let tenths = (speed * 10.0).round() as i64;
    if tenths == 10 {
        "1 knot".to_string()
    } else if tenths % 10 == 0 {
        format!("{} knots", tenths / 10)
    } else {
        format!("{:.1} knots", tenths as f64 / 10.0)
    }
}

pub fn sightings_phrase(sightings: u32) -> String {
    match sightings {
        0 => "first sighting".to_string(),
        1 => "one previous sighting".to_string(),
        n => format!("{} previous sightings", n),
    }
}

/// `<name>, <type>, course <c> degrees, speed <s>, <sightings>.`
pub fn summary_sentence(record: &ShipRecord) -> String {
    format!(
        "{}, {}, {}, speed {}, {}.",
        record.name,
        record.ship_type,
        course_phrase(record.course),
        speed_phrase(record.speed),
        sightings_phrase(record.sightings)
    )
}
