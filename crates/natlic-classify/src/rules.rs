//! Ordered affiliation rules
//!
//! One rule per institution category: a case-insensitive pattern matched
//! unanchored against each affiliation string. The list order is the rule
//! precedence and must be preserved exactly; adding or removing a category
//! means editing this list only.

use lazy_static::lazy_static;
use regex::Regex;

/// Catch-all category for rows no rule matches.
pub const OTHER_CATEGORY: &str = "other";

/// One affiliation category.
pub struct CategoryRule {
    pub category: &'static str,
    pub pattern: Regex,
}

fn rule(category: &'static str, pattern: &str) -> CategoryRule {
    CategoryRule {
        category,
        pattern: Regex::new(&format!("(?i){pattern}")).unwrap(),
    }
}

lazy_static! {
    static ref DEFAULT_RULES: Vec<CategoryRule> = vec![
        rule(
            "uni-basel",
            r"(universit(y|ies) (of )?bas(el|le)|bas(el|le) university)|(universit([äa]|ae)t basel|basel universit([äa]|ae)t)",
        ),
        rule(
            "unispital-basel",
            r"(universit([äa]|ae)tsspital basel)|(university women's clinic basel)|(university (children's )?(hospital[s]?|clinic[s]?),? (of )?basel)|(basel university hospital)|(university-hosp\. basel)|(((university hospital)|universitätsklinik(en)?|universitiitsklinik).+basel)|(university hospital, basel)",
        ),
        rule(
            "kantons-spital-basel",
            r"(canton hospital,? basel)|(kantonsspital basel)|kantonsspital[s]?.+basel",
        ),
        rule("biozentrum", r"biozentrum.+basel"),
        rule("friedrich-miescher", r"friedrich[\- ]miescher[ \-]institut[e]?"),
        rule("institute-of-botany", r"institute of botany.+basel"),
        rule(
            "swiss-tropical-institute",
            r"(swiss tropical (and public health )?institute)|(swiss tph)",
        ),
        rule(
            "address-in-basel",
            r"bernouuianum|schönbeinstr(\.|asse)|rheinsprung[ ]?9|petersgraben 9|nadelberg 6",
        ),
        rule("unispital-not-in-basel", r"university hospital"),
        rule(
            "private-industry",
            r"novartis|ciba-geigy|ciba|geigy|sandoz|roche |hoffmann[\- ]la[ ]?roche|actelion|basel institute for immunology|syngenta|healthecon ag, basel|basilea pharma|center for outcomes research",
        ),
        rule(
            "unaffiliated-institutes",
            r"(basel university medical clinic)|(zürich-basel)|(swiss institute of bioinformatics)",
        ),
        rule(
            "other-unis",
            r"university of zurich|université de lausanne|rockefeller university|university of california",
        ),
        rule("fachhochschule-basel", r"university of applied sciences basel"),
        rule("email", r"@unibas\.ch"),
    ];
}

/// The default ordered rule list.
pub fn default_rules() -> &'static [CategoryRule] {
    &DEFAULT_RULES
}

/// First rule (in list order) matching any of the affiliation strings,
/// together with the exact string that matched.
pub fn first_match<'a>(
    rules: &'static [CategoryRule],
    affiliations: &'a [&'a str],
) -> Option<(&'static CategoryRule, &'a str)> {
    for rule in rules {
        for affiliation in affiliations {
            if rule.pattern.is_match(affiliation) {
                return Some((rule, affiliation));
            }
        }
    }
    None
}
