//! # Search Parameters
//!
//! The filter form the user fills in, and its translation into the query
//! string the `/players` endpoint understands.
//!
//! ```text
//! SearchParameters { age 18..=30, ca 100..=150, pa 120..=200, AgeAscending }
//!        │
//!        ▼  search_parameters_to_query_items()
//! minAge=18 maxAge=30 minCa=100 maxCa=150 minPa=120 maxPa=200 orderBy=age-asc
//! ```
//!
//! The order of the emitted items is fixed. `orderBy` is appended only when
//! a sort option other than `SortOption::None` is chosen.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const AGE_BOUNDS: RangeInclusive<u16> = 15..=45;
pub const ABILITY_BOUNDS: RangeInclusive<u16> = 1..=200;

/// A single `name=value` pair appended to a URL's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub name: String,
    pub value: String,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    None,
    AgeAscending,
    AgeDescending,
    CurrentAbilityAscending,
    CurrentAbilityDescending,
    PotentialAbilityAscending,
    PotentialAbilityDescending,
    ValueAscending,
    ValueDescending,
}

impl SortOption {
    const ALL: [SortOption; 9] = [
        SortOption::None,
        SortOption::AgeAscending,
        SortOption::AgeDescending,
        SortOption::CurrentAbilityAscending,
        SortOption::CurrentAbilityDescending,
        SortOption::PotentialAbilityAscending,
        SortOption::PotentialAbilityDescending,
        SortOption::ValueAscending,
        SortOption::ValueDescending,
    ];

    /// The `orderBy` value sent to the API.
    ///
    /// Options the API table has no entry for map to an empty string, which
    /// still goes out as `orderBy=`.
    pub fn order_by_value(self) -> &'static str {
        match self {
            SortOption::AgeAscending => "age-asc",
            SortOption::AgeDescending => "age-desc",
            SortOption::CurrentAbilityAscending => "currentAbility-asc",
            SortOption::CurrentAbilityDescending => "currentAbility-desc",
            SortOption::PotentialAbilityAscending => "potentialAbility-asc",
            SortOption::PotentialAbilityDescending => "potentialAbility-desc",
            _ => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOption::None => "None",
            SortOption::AgeAscending => "Age ↑",
            SortOption::AgeDescending => "Age ↓",
            SortOption::CurrentAbilityAscending => "Current ability ↑",
            SortOption::CurrentAbilityDescending => "Current ability ↓",
            SortOption::PotentialAbilityAscending => "Potential ability ↑",
            SortOption::PotentialAbilityDescending => "Potential ability ↓",
            SortOption::ValueAscending => "Value ↑",
            SortOption::ValueDescending => "Value ↓",
        }
    }

    /// Cycles through the options, wrapping at both ends.
    pub fn step(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::ALL[next]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub age_range: RangeInclusive<u16>,
    pub current_ability_range: RangeInclusive<u16>,
    pub potential_ability_range: RangeInclusive<u16>,
    #[serde(default)]
    pub sort: SortOption,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            age_range: AGE_BOUNDS,
            current_ability_range: ABILITY_BOUNDS,
            potential_ability_range: ABILITY_BOUNDS,
            sort: SortOption::None,
        }
    }
}

/// Editable fields of the search form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    MinAge,
    MaxAge,
    MinCurrentAbility,
    MaxCurrentAbility,
    MinPotentialAbility,
    MaxPotentialAbility,
    Sort,
}

impl SearchField {
    pub const ALL: [SearchField; 7] = [
        SearchField::MinAge,
        SearchField::MaxAge,
        SearchField::MinCurrentAbility,
        SearchField::MaxCurrentAbility,
        SearchField::MinPotentialAbility,
        SearchField::MaxPotentialAbility,
        SearchField::Sort,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchField::MinAge => "Min age",
            SearchField::MaxAge => "Max age",
            SearchField::MinCurrentAbility => "Min current ability",
            SearchField::MaxCurrentAbility => "Max current ability",
            SearchField::MinPotentialAbility => "Min potential ability",
            SearchField::MaxPotentialAbility => "Max potential ability",
            SearchField::Sort => "Sort by",
        }
    }

    fn step_size(self) -> u16 {
        match self {
            SearchField::MinAge | SearchField::MaxAge => 1,
            _ => 5,
        }
    }
}

impl SearchParameters {
    /// Display value for a form field.
    pub fn value_of(&self, field: SearchField) -> String {
        match field {
            SearchField::MinAge => self.age_range.start().to_string(),
            SearchField::MaxAge => self.age_range.end().to_string(),
            SearchField::MinCurrentAbility => self.current_ability_range.start().to_string(),
            SearchField::MaxCurrentAbility => self.current_ability_range.end().to_string(),
            SearchField::MinPotentialAbility => self.potential_ability_range.start().to_string(),
            SearchField::MaxPotentialAbility => self.potential_ability_range.end().to_string(),
            SearchField::Sort => self.sort.label().to_string(),
        }
    }

    /// Pulls every range inside its bounds and puts its ends in order.
    /// Parameters read back from disk go through this before use.
    pub fn sanitized(self) -> Self {
        Self {
            age_range: fit(&self.age_range, &AGE_BOUNDS),
            current_ability_range: fit(&self.current_ability_range, &ABILITY_BOUNDS),
            potential_ability_range: fit(&self.potential_ability_range, &ABILITY_BOUNDS),
            sort: self.sort,
        }
    }

    /// Nudges one field up or down. Bounds stay inside their limits and a
    /// range's lower end never passes its upper end.
    pub fn adjust(&mut self, field: SearchField, increase: bool) {
        let step = field.step_size();
        match field {
            SearchField::MinAge => {
                self.age_range = adjust_start(&self.age_range, &AGE_BOUNDS, step, increase)
            }
            SearchField::MaxAge => {
                self.age_range = adjust_end(&self.age_range, &AGE_BOUNDS, step, increase)
            }
            SearchField::MinCurrentAbility => {
                self.current_ability_range =
                    adjust_start(&self.current_ability_range, &ABILITY_BOUNDS, step, increase)
            }
            SearchField::MaxCurrentAbility => {
                self.current_ability_range =
                    adjust_end(&self.current_ability_range, &ABILITY_BOUNDS, step, increase)
            }
            SearchField::MinPotentialAbility => {
                self.potential_ability_range =
                    adjust_start(&self.potential_ability_range, &ABILITY_BOUNDS, step, increase)
            }
            SearchField::MaxPotentialAbility => {
                self.potential_ability_range =
                    adjust_end(&self.potential_ability_range, &ABILITY_BOUNDS, step, increase)
            }
            SearchField::Sort => self.sort = self.sort.step(increase),
        }
    }
}

fn nudge(value: u16, step: u16, increase: bool) -> u16 {
    if increase {
        value.saturating_add(step)
    } else {
        value.saturating_sub(step)
    }
}

/// `range` with both ends inside `bounds`, lower end first.
fn fit(range: &RangeInclusive<u16>, bounds: &RangeInclusive<u16>) -> RangeInclusive<u16> {
    let pin = |v: u16| v.max(*bounds.start()).min(*bounds.end());
    let (a, b) = (pin(*range.start()), pin(*range.end()));
    a.min(b)..=a.max(b)
}

fn adjust_start(
    range: &RangeInclusive<u16>,
    bounds: &RangeInclusive<u16>,
    step: u16,
    increase: bool,
) -> RangeInclusive<u16> {
    let range = fit(range, bounds);
    let start = nudge(*range.start(), step, increase).clamp(*bounds.start(), *range.end());
    start..=*range.end()
}

fn adjust_end(
    range: &RangeInclusive<u16>,
    bounds: &RangeInclusive<u16>,
    step: u16,
    increase: bool,
) -> RangeInclusive<u16> {
    let range = fit(range, bounds);
    let end = nudge(*range.end(), step, increase).clamp(*range.start(), *bounds.end());
    *range.start()..=end
}

/// Translates search filters into ordered query items:
/// `minAge, maxAge, minCa, maxCa, minPa, maxPa[, orderBy]`.
pub fn search_parameters_to_query_items(params: &SearchParameters) -> Vec<QueryItem> {
    let mut items = vec![
        QueryItem::new("minAge", params.age_range.start().to_string()),
        QueryItem::new("maxAge", params.age_range.end().to_string()),
        QueryItem::new("minCa", params.current_ability_range.start().to_string()),
        QueryItem::new("maxCa", params.current_ability_range.end().to_string()),
        QueryItem::new("minPa", params.potential_ability_range.start().to_string()),
        QueryItem::new("maxPa", params.potential_ability_range.end().to_string()),
    ];

    if params.sort != SortOption::None {
        items.push(QueryItem::new("orderBy", params.sort.order_by_value()));
    }

    items
}
