use serde::Serialize;

use crate::assessment::holland::holland_code;
use crate::models::riasec::{HollandCode, TraitAxis, TraitVector};

#[derive(Debug, Clone, Serialize)]
pub struct TypeDescription {
    pub summary: &'static str,
    pub strengths: [&'static str; 3],
    pub work_style: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedType {
    pub axis: TraitAxis,
    pub name: &'static str,
    pub score: f64,
    pub description: TypeDescription,
}

#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub holland_code: HollandCode,
    pub primary_type: RankedType,
    pub secondary_types: Vec<RankedType>,
    pub balance_analysis: &'static str,
    pub career_themes: Vec<&'static str>,
}

pub fn describe(axis: TraitAxis) -> TypeDescription {
    match axis {
        TraitAxis::Realistic => TypeDescription {
            summary: "Practical, hands-on, and mechanically inclined",
            strengths: ["Problem-solving", "Working with tools", "Physical coordination"],
            work_style: "Prefers concrete tasks and tangible results",
        },
        TraitAxis::Investigative => TypeDescription {
            summary: "Analytical, intellectual, and scientific",
            strengths: ["Research", "Analysis", "Abstract thinking"],
            work_style: "Enjoys solving complex problems and theoretical work",
        },
        TraitAxis::Artistic => TypeDescription {
            summary: "Creative, expressive, and imaginative",
            strengths: ["Creativity", "Self-expression", "Innovation"],
            work_style: "Prefers unstructured environments and creative freedom",
        },
        TraitAxis::Social => TypeDescription {
            summary: "Helpful, cooperative, and people-oriented",
            strengths: ["Communication", "Teaching", "Empathy"],
            work_style: "Enjoys working with and helping others",
        },
        TraitAxis::Enterprising => TypeDescription {
            summary: "Persuasive, ambitious, and leadership-oriented",
            strengths: ["Leadership", "Persuasion", "Decision-making"],
            work_style: "Thrives in competitive environments and enjoys influence",
        },
        TraitAxis::Conventional => TypeDescription {
            summary: "Organized, detail-oriented, and systematic",
            strengths: ["Organization", "Attention to detail", "Following procedures"],
            work_style: "Prefers structured environments and clear expectations",
        },
    }
}

/// Describes how spread out the six scores are (max − min).
pub fn balance_analysis(vector: &TraitVector) -> &'static str {
    let scores = vector.to_array();
    let max = scores.iter().copied().fold(f64::MIN, f64::max);
    let min = scores.iter().copied().fold(f64::MAX, f64::min);
    match max - min {
        r if r < 20.0 => "Well-balanced across all types",
        r if r < 40.0 => "Moderate differentiation with some clear preferences",
        _ => "Strong differentiation with clear type preferences",
    }
}

/// Themes for the unordered pair of the two highest types.
pub fn career_themes(first: TraitAxis, second: TraitAxis) -> Vec<&'static str> {
    use TraitAxis::*;

    let pair = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    let themes: [&'static str; 3] = match pair {
        (Realistic, Investigative) => ["Technical Problem-Solving", "Engineering", "Applied Sciences"],
        (Realistic, Artistic) => ["Design Engineering", "Architecture", "Craftsmanship"],
        (Realistic, Social) => ["Technical Training", "Healthcare Technology", "Skilled Trades Education"],
        (Realistic, Enterprising) => ["Construction Management", "Technical Sales", "Manufacturing Leadership"],
        (Realistic, Conventional) => ["Quality Control", "Technical Documentation", "Systems Maintenance"],
        (Investigative, Artistic) => ["Scientific Innovation", "Research Design", "Data Visualization"],
        (Investigative, Social) => ["Medical Research", "Educational Technology", "Science Communication"],
        (Investigative, Enterprising) => ["Technology Entrepreneurship", "Research Management", "Consulting"],
        (Investigative, Conventional) => ["Data Analysis", "Laboratory Management", "Technical Writing"],
        (Artistic, Social) => ["Arts Education", "Creative Therapy", "Community Arts"],
        (Artistic, Enterprising) => ["Creative Direction", "Arts Management", "Media Production"],
        (Artistic, Conventional) => ["Graphic Design", "Digital Arts", "Content Management"],
        (Social, Enterprising) => ["Human Resources", "Educational Leadership", "Community Development"],
        (Social, Conventional) => ["Healthcare Administration", "School Counseling", "Social Services"],
        (Enterprising, Conventional) => ["Business Management", "Financial Services", "Operations Management"],
        _ => ["Leadership", "Innovation", "Problem-Solving"],
    };
    themes.to_vec()
}

pub fn interpret(vector: &TraitVector) -> Interpretation {
    let code = holland_code(vector);
    let ranked = |axis: TraitAxis| RankedType {
        axis,
        name: axis.name(),
        score: vector.score(axis),
        description: describe(axis),
    };
    let [second, third] = code.secondary();

    Interpretation {
        holland_code: code,
        primary_type: ranked(code.primary()),
        secondary_types: vec![ranked(second), ranked(third)],
        balance_analysis: balance_analysis(vector),
        career_themes: career_themes(code.primary(), second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_orders_primary_and_secondary() {
        let vector = TraitVector::new([20.0, 85.0, 30.0, 40.0, 25.0, 70.0]).unwrap();
        let result = interpret(&vector);
        assert_eq!(result.holland_code.to_string(), "ICS");
        assert_eq!(result.primary_type.name, "Investigative");
        assert_eq!(result.primary_type.score, 85.0);
        assert_eq!(result.secondary_types[0].axis, TraitAxis::Conventional);
        assert_eq!(result.secondary_types[1].axis, TraitAxis::Social);
        assert_eq!(result.career_themes[0], "Data Analysis");
    }

    #[test]
    fn test_themes_ignore_pair_order() {
        assert_eq!(
            career_themes(TraitAxis::Enterprising, TraitAxis::Social),
            career_themes(TraitAxis::Social, TraitAxis::Enterprising)
        );
    }

    #[test]
    fn test_balance_thresholds() {
        let flat = TraitVector::new([50.0, 55.0, 60.0, 52.0, 58.0, 51.0]).unwrap();
        assert_eq!(balance_analysis(&flat), "Well-balanced across all types");

        let moderate = TraitVector::new([50.0, 80.0, 60.0, 52.0, 58.0, 51.0]).unwrap();
        assert!(balance_analysis(&moderate).starts_with("Moderate"));

        let strong = TraitVector::new([10.0, 90.0, 60.0, 52.0, 58.0, 51.0]).unwrap();
        assert!(balance_analysis(&strong).starts_with("Strong"));
    }
}
