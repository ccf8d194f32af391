use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Letter grade used by the abortion-access and gun-law datasets.
///
/// Labels are matched exactly (case- and symbol-sensitive). The ordinal
/// points follow a GPA-like scale from `F = 0` to `A+ = 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    pub fn all() -> &'static [LetterGrade] {
        &[
            Self::APlus,
            Self::A,
            Self::AMinus,
            Self::BPlus,
            Self::B,
            Self::BMinus,
            Self::CPlus,
            Self::C,
            Self::CMinus,
            Self::DPlus,
            Self::D,
            Self::DMinus,
            Self::F,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "A-" => Some(Self::AMinus),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "B-" => Some(Self::BMinus),
            "C+" => Some(Self::CPlus),
            "C" => Some(Self::C),
            "C-" => Some(Self::CMinus),
            "D+" => Some(Self::DPlus),
            "D" => Some(Self::D),
            "D-" => Some(Self::DMinus),
            "F" => Some(Self::F),
            _ => None,
        }
    }

    /// Ordinal points for grade comparisons.
    pub fn points(&self) -> Decimal {
        match self {
            Self::APlus => Decimal::new(5, 0),
            Self::A => Decimal::new(4, 0),
            Self::AMinus => Decimal::new(37, 1),
            Self::BPlus => Decimal::new(33, 1),
            Self::B => Decimal::new(3, 0),
            Self::BMinus => Decimal::new(27, 1),
            Self::CPlus => Decimal::new(23, 1),
            Self::C => Decimal::new(2, 0),
            Self::CMinus => Decimal::new(17, 1),
            Self::DPlus => Decimal::new(13, 1),
            Self::D => Decimal::new(1, 0),
            Self::DMinus => Decimal::new(7, 1),
            Self::F => Decimal::ZERO,
        }
    }
}

/// Points for an optional grade; an unrecognized grade counts as the worst.
pub fn grade_points(grade: Option<LetterGrade>) -> Decimal {
    grade.map(|g| g.points()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_round_trips_every_label() {
        for grade in LetterGrade::all() {
            assert_eq!(LetterGrade::parse(grade.as_str()), Some(*grade));
        }
    }

    #[test]
    fn parse_is_case_and_symbol_sensitive() {
        assert_eq!(LetterGrade::parse("a"), None);
        assert_eq!(LetterGrade::parse("A +"), None);
        assert_eq!(LetterGrade::parse(" A"), None);
        assert_eq!(LetterGrade::parse("E"), None);
    }

    #[test]
    fn points_match_grade_scale() {
        let expected = [
            dec!(5),
            dec!(4),
            dec!(3.7),
            dec!(3.3),
            dec!(3),
            dec!(2.7),
            dec!(2.3),
            dec!(2),
            dec!(1.7),
            dec!(1.3),
            dec!(1),
            dec!(0.7),
            dec!(0),
        ];

        let actual: Vec<_> = LetterGrade::all().iter().map(|g| g.points()).collect();

        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn unrecognized_grade_scores_zero() {
        assert_eq!(grade_points(None), Decimal::ZERO);
        assert_eq!(grade_points(Some(LetterGrade::F)), Decimal::ZERO);
        assert_eq!(grade_points(Some(LetterGrade::BPlus)), dec!(3.3));
    }

    #[test]
    fn serde_uses_grade_labels() {
        let json = serde_json::to_string(&LetterGrade::AMinus).unwrap();
        assert_eq!(json, "\"A-\"");

        let grade: LetterGrade = serde_json::from_str("\"D+\"").unwrap();
        assert_eq!(grade, LetterGrade::DPlus);
    }
}
