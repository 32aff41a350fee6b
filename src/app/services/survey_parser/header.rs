//! Header-driven column inference for survey sheets
//!
//! The survey tool regenerates its header text every school year, so column
//! wording, ordering, and repetition all drift. This module analyzes the raw
//! header row once per sheet and produces a typed index map: fixed fields
//! match by marker substring, while the dynamically shaped per-weekday
//! drop-off questions are partitioned into segments delimited by each
//! weekday's anchor column.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::models::Weekday;
use crate::constants::{MAX_TRIP_SLOTS, markers};

static HEADER_FILLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_()\-.,]").unwrap());
static SLOT_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([123])하교").unwrap());

/// Column layout of one weekday's drop-off segment
///
/// All indices are 0-based positions in the header row. Slot arrays are
/// indexed by trip-time slot (1st/2nd/3rd dismissal); an unbound slot stays
/// `None` / empty and every dependent extraction degrades to empty values.
#[derive(Debug, Clone, Default)]
pub struct DaySchedule {
    /// Drop-off method column
    pub method: Option<usize>,

    /// Drop-off time column
    pub time: Option<usize>,

    /// Half-open column range `[anchor, next_anchor)` this weekday governs
    pub segment: Option<(usize, usize)>,

    /// Vehicle column bound to each trip-time slot
    pub vehicle_slots: [Option<usize>; MAX_TRIP_SLOTS],

    /// Location-candidate columns bound to each trip-time slot
    pub location_slots: [Vec<usize>; MAX_TRIP_SLOTS],
}

impl DaySchedule {
    /// The column that orders and delimits this weekday's segment
    pub fn anchor(&self) -> Option<usize> {
        self.method.or(self.time)
    }

    /// Vehicle column for one trip-time slot (1-based slot number)
    pub fn vehicle_for_slot(&self, slot: usize) -> Option<usize> {
        match slot {
            1..=MAX_TRIP_SLOTS => self.vehicle_slots[slot - 1],
            _ => None,
        }
    }

    /// Location candidates for one trip-time slot (1-based slot number)
    pub fn locations_for_slot(&self, slot: usize) -> &[usize] {
        match slot {
            1..=MAX_TRIP_SLOTS => &self.location_slots[slot - 1],
            _ => &[],
        }
    }

    /// Distinct bound vehicle columns in slot order
    pub fn vehicle_candidates(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for col in self.vehicle_slots.iter().flatten() {
            if !out.contains(col) {
                out.push(*col);
            }
        }
        out
    }

    /// Union of all slots' location candidates in slot order
    pub fn location_candidates(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for col in self.location_slots.iter().flatten() {
            if !out.contains(col) {
                out.push(*col);
            }
        }
        out
    }
}

/// Computed, read-only mapping from logical field to header column
///
/// Built once per grid by [`HeaderIndex::locate`]. A field whose marker
/// matches no header cell keeps `None`; extraction then yields empty or
/// default values for it instead of failing.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    pub name: Option<usize>,
    pub grade: Option<usize>,
    pub class: Option<usize>,
    pub number: Option<usize>,
    pub birth: Option<usize>,
    pub address: Option<usize>,
    pub mother_name: Option<usize>,
    pub mother_phone: Option<usize>,
    pub father_name: Option<usize>,
    pub father_phone: Option<usize>,
    pub siblings: Option<usize>,
    pub boarding_method: Option<usize>,
    pub boarding_vehicle: Option<usize>,
    pub main_parent_phone: Option<usize>,

    /// Candidate columns for the morning boarding location; several
    /// near-duplicate question columns may exist and first non-empty wins
    pub boarding_locations: Vec<usize>,

    /// Per-weekday drop-off segments, Monday through Friday
    pub days: [DaySchedule; 5],
}

impl HeaderIndex {
    /// Analyze a raw header row and build the column index map
    pub fn locate(headers: &[String]) -> Self {
        let mut index = HeaderIndex {
            name: first_index(headers, markers::NAME),
            grade: first_index(headers, markers::GRADE),
            class: first_index(headers, markers::CLASS),
            number: first_index(headers, markers::NUMBER),
            birth: first_index(headers, markers::BIRTH),
            address: first_index(headers, markers::ADDRESS),
            mother_name: first_index(headers, markers::MOTHER_NAME),
            mother_phone: first_index(headers, markers::MOTHER_PHONE),
            father_name: first_index(headers, markers::FATHER_NAME),
            father_phone: first_index(headers, markers::FATHER_PHONE),
            siblings: first_index(headers, markers::SIBLINGS),
            boarding_method: first_index(headers, markers::BOARDING_METHOD),
            boarding_vehicle: first_index(headers, markers::BOARDING_VEHICLE),
            main_parent_phone: first_index(headers, markers::MAIN_PARENT_PHONE),
            boarding_locations: indices_with_tokens(headers, markers::BOARDING_LOCATION_TOKENS),
            days: Default::default(),
        };

        locate_day_segments(headers, &mut index.days);
        index
    }

    /// Segment layout for one weekday
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }
}

/// Normalize header text for token matching: lowercase, filler stripped
fn normalize_header(header: &str) -> String {
    HEADER_FILLER
        .replace_all(&header.to_lowercase(), "")
        .into_owned()
}

/// First header cell containing the marker substring (raw containment)
fn first_index(headers: &[String], marker: &str) -> Option<usize> {
    headers.iter().position(|h| h.contains(marker))
}

/// All header cells whose normalized text contains every token
fn indices_with_tokens(headers: &[String], tokens: &[&str]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| {
            let normalized = normalize_header(h);
            tokens.iter().all(|t| normalized.contains(t))
        })
        .map(|(i, _)| i)
        .collect()
}

/// First header cell naming the weekday whose normalized text contains both
/// tokens of a drop-off question pair
fn day_question_index(headers: &[String], day: Weekday, tokens: (&str, &str)) -> Option<usize> {
    headers.iter().position(|h| {
        if !h.contains(day.label()) {
            return false;
        }
        let normalized = normalize_header(h);
        normalized.contains(tokens.0) && normalized.contains(tokens.1)
    })
}

/// Partition the header row into per-weekday drop-off segments
///
/// Each weekday's anchor is its method column, else its time column; a
/// weekday without either contributes no segment. Anchors sorted by column
/// position (not calendar order) delimit half-open segments running to the
/// next anchor or the end of the header row.
fn locate_day_segments(headers: &[String], days: &mut [DaySchedule; 5]) {
    for day in Weekday::ALL {
        let schedule = &mut days[day.index()];
        schedule.method = day_question_index(headers, day, markers::DROPOFF_METHOD_TOKENS);
        schedule.time = day_question_index(headers, day, markers::DROPOFF_TIME_TOKENS);
    }

    let mut anchors: Vec<(usize, usize)> = Weekday::ALL
        .iter()
        .filter_map(|d| days[d.index()].anchor().map(|col| (d.index(), col)))
        .collect();
    anchors.sort_by_key(|&(_, col)| col);

    for (i, &(day_index, start)) in anchors.iter().enumerate() {
        let end = anchors
            .get(i + 1)
            .map(|&(_, col)| col)
            .unwrap_or(headers.len());

        let vehicle_candidates = columns_in_segment(headers, start, end, is_vehicle_column);
        let location_candidates = columns_in_segment(headers, start, end, is_location_column);

        let schedule = &mut days[day_index];
        schedule.segment = Some((start, end));
        assign_vehicle_slots(headers, &vehicle_candidates, &mut schedule.vehicle_slots);
        assign_location_slots(
            &location_candidates,
            end,
            &schedule.vehicle_slots,
            &mut schedule.location_slots,
        );
    }
}

fn columns_in_segment(
    headers: &[String],
    start: usize,
    end: usize,
    classify: fn(&str) -> bool,
) -> Vec<usize> {
    (start..end)
        .filter(|&c| classify(&normalize_header(&headers[c])))
        .collect()
}

fn is_vehicle_column(normalized: &str) -> bool {
    normalized.contains(markers::VEHICLE_TOKEN)
}

fn is_location_column(normalized: &str) -> bool {
    markers::LOCATION_TOKENS.iter().any(|t| normalized.contains(t))
}

/// Bind vehicle-candidate columns to trip-time slots
///
/// Ordered matching strategies, tried in sequence:
/// 1. Explicit slot markers in the header text ("2하교"); first match wins
///    per slot, left to right.
/// 2. Positional: slot k takes the k-th candidate when still unbound.
/// 3. Slot-insensitive: any remaining unbound slot takes the first
///    candidate. Can conflate distinct slots on irregularly labeled years.
fn assign_vehicle_slots(
    headers: &[String],
    candidates: &[usize],
    slots: &mut [Option<usize>; MAX_TRIP_SLOTS],
) {
    for &col in candidates {
        if let Some(caps) = SLOT_MARKER.captures(&normalize_header(&headers[col])) {
            let slot: usize = caps[1].parse().unwrap_or(0);
            if (1..=MAX_TRIP_SLOTS).contains(&slot) && slots[slot - 1].is_none() {
                slots[slot - 1] = Some(col);
            }
        }
    }

    for (k, slot) in slots.iter_mut().enumerate() {
        if slot.is_none() {
            if let Some(&col) = candidates.get(k) {
                *slot = Some(col);
            }
        }
    }

    if let Some(&first) = candidates.first() {
        for slot in slots.iter_mut() {
            if slot.is_none() {
                *slot = Some(first);
            }
        }
    }
}

/// Bind location-candidate columns to trip-time slots
///
/// Bound vehicle-slot pairs sorted by column delimit the candidate ranges:
/// each slot claims the location columns strictly between its vehicle column
/// and the next vehicle column (segment end for the last), falling back to
/// the weekday's whole candidate list when the range is empty. Slots with no
/// vehicle binding also receive the whole list.
fn assign_location_slots(
    candidates: &[usize],
    segment_end: usize,
    vehicle_slots: &[Option<usize>; MAX_TRIP_SLOTS],
    location_slots: &mut [Vec<usize>; MAX_TRIP_SLOTS],
) {
    let mut bound: Vec<(usize, usize)> = vehicle_slots
        .iter()
        .enumerate()
        .filter_map(|(k, v)| v.map(|col| (k, col)))
        .collect();
    bound.sort_by_key(|&(_, col)| col);

    for (j, &(k, vehicle_col)) in bound.iter().enumerate() {
        let next_col = bound
            .get(j + 1)
            .map(|&(_, col)| col)
            .unwrap_or(segment_end);

        let mut in_range: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&c| c > vehicle_col && c < next_col)
            .collect();
        if in_range.is_empty() {
            in_range = candidates.to_vec();
        }
        location_slots[k] = in_range;
    }

    for (k, slot) in location_slots.iter_mut().enumerate() {
        if vehicle_slots[k].is_none() {
            *slot = candidates.to_vec();
        }
    }
}
