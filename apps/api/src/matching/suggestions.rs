use crate::matching::role_matcher::MatchResult;

/// Match percentage below which the assessment line focuses on growth.
pub const GROWTH_THRESHOLD: f64 = 50.0;

const CLOSING_TIPS: [&str; 2] = [
    "Resume Enhancement: Use action verbs and quantify achievements.",
    "Optimize your resume with keywords matching the job description.",
];

/// Ordered advice for one match against `role`: assessment, one line per
/// missing skill, then the fixed closing tips.
pub fn generate_suggestions(result: &MatchResult, role: &str) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(result.missing_skills.len() + 3);
    suggestions.push(assessment(result.match_percentage, role));

    suggestions.extend(result.missing_skills.iter().map(|skill| {
        format!("Priority: {skill} - Consider learning this skill to improve your profile.")
    }));

    suggestions.extend(CLOSING_TIPS.iter().map(|tip| tip.to_string()));
    suggestions
}

fn assessment(match_percentage: f64, role: &str) -> String {
    let target = match role.trim() {
        "" => "this role".to_string(),
        name => format!("the {name} role"),
    };
    if match_percentage < GROWTH_THRESHOLD {
        format!(
            "Significant opportunity for growth. Focus on building foundational skills for {target}."
        )
    } else {
        format!("Good match for {target}! Keep enhancing your skills with advanced topics.")
    }
}
