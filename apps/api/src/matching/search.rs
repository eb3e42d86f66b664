use serde::{Deserialize, Serialize};

use crate::models::career::{CareerRecord, EducationLevel, SeniorityLevel};
use crate::models::riasec::TraitAxis;

const MAX_RELATED: usize = 4;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerFilters {
    /// Keep careers listing any of these letters.
    #[serde(default)]
    pub holland_codes: Vec<TraitAxis>,
    /// Keep careers requiring at least this level.
    pub education_level: Option<EducationLevel>,
    /// Keep careers whose range lies inside (min, max).
    pub salary_range: Option<(u32, u32)>,
    pub growth_outlook: Option<f64>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Case-insensitive text search over title, description and category, then filters.
/// Preserves catalog order.
pub fn search_careers<'a>(
    catalog: &'a [CareerRecord],
    query: &str,
    filters: &CareerFilters,
) -> Vec<&'a CareerRecord> {
    let query_lower = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|career| {
            query_lower.is_empty()
                || career.title.to_lowercase().contains(&query_lower)
                || career.description.to_lowercase().contains(&query_lower)
                || career.category.to_lowercase().contains(&query_lower)
        })
        .filter(|career| passes_filters(career, filters))
        .collect()
}

fn passes_filters(career: &CareerRecord, filters: &CareerFilters) -> bool {
    if !filters.holland_codes.is_empty()
        && !filters.holland_codes.iter().any(|axis| career.lists_axis(*axis))
    {
        return false;
    }

    if let Some(min_level) = filters.education_level {
        match career.education_level {
            Some(level) if level >= min_level => {}
            _ => return false,
        }
    }

    if let Some((min_salary, max_salary)) = filters.salary_range {
        match (career.salary_range_min, career.salary_range_max) {
            (Some(low), Some(high)) if low >= min_salary && high <= max_salary => {}
            _ => return false,
        }
    }

    if let Some(min_growth) = filters.growth_outlook {
        if career.growth_outlook.map_or(true, |g| g < min_growth) {
            return false;
        }
    }

    if !filters.categories.is_empty() && !filters.categories.contains(&career.category) {
        return false;
    }

    true
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalaryProgression {
    pub entry_level: u32,
    pub mid_level: u32,
    pub senior_level: u32,
    pub leadership_level: u32,
}

/// Rough salary ladder from the career's range. Missing bounds default to 50k–80k.
pub fn salary_progression(career: &CareerRecord) -> SalaryProgression {
    let base_min = f64::from(career.salary_range_min.unwrap_or(50_000));
    let base_max = f64::from(career.salary_range_max.unwrap_or(80_000));

    SalaryProgression {
        entry_level: (base_min * 0.8).round() as u32,
        mid_level: ((base_min + base_max) / 2.0).round() as u32,
        senior_level: (base_max * 1.2).round() as u32,
        leadership_level: (base_max * 1.5).round() as u32,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressionStep {
    pub years: &'static str,
    pub title: String,
    pub focus: &'static str,
}

/// Typical next roles from the career's seniority level. Senior roles have no ladder.
pub fn career_progression(career: &CareerRecord) -> Vec<ProgressionStep> {
    let step = |years: &'static str, title: String, focus: &'static str| ProgressionStep {
        years,
        title,
        focus,
    };
    match career.seniority_level {
        SeniorityLevel::Entry => vec![
            step("0-2", career.title.clone(), "Learn fundamentals and gain experience"),
            step(
                "2-5",
                format!("Senior {}", career.title),
                "Develop expertise and leadership skills",
            ),
            step(
                "5-10",
                format!("{} Manager", career.title),
                "Lead teams and strategic initiatives",
            ),
        ],
        SeniorityLevel::Mid => vec![
            step("0-3", career.title.clone(), "Deepen expertise and expand skills"),
            step(
                "3-7",
                format!("Senior {}", career.title),
                "Mentor others and lead projects",
            ),
            step(
                "7-12",
                format!("{} Director", career.category),
                "Strategic leadership and vision",
            ),
        ],
        SeniorityLevel::Senior => Vec::new(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerInsights {
    pub career: CareerRecord,
    pub related_careers: Vec<CareerRecord>,
    pub progression_paths: Vec<ProgressionStep>,
    pub salary_progression: SalaryProgression,
}

/// Careers sharing a Holland letter and the category with `career`, excluding itself.
pub fn career_insights(catalog: &[CareerRecord], career: &CareerRecord) -> CareerInsights {
    let filters = CareerFilters {
        holland_codes: career.holland_codes.clone(),
        categories: vec![career.category.clone()],
        ..CareerFilters::default()
    };
    let related_careers = search_careers(catalog, "", &filters)
        .into_iter()
        .filter(|c| c.id != career.id)
        .take(MAX_RELATED)
        .cloned()
        .collect();

    CareerInsights {
        career: career.clone(),
        related_careers,
        progression_paths: career_progression(career),
        salary_progression: salary_progression(career),
    }
}
