use super::*;

mod simple_score {
    use super::*;

    #[test]
    fn ordering() {
        assert!(SimpleScore::of(-3) > SimpleScore::of(-5));
        assert!(SimpleScore::of(0) > SimpleScore::of(-1));
        assert_eq!(SimpleScore::of(7), SimpleScore::of(7));
    }

    #[test]
    fn arithmetic() {
        let a = SimpleScore::of(-3);
        let b = SimpleScore::of(-5);
        assert_eq!(a + b, SimpleScore::of(-8));
        assert_eq!(a - b, SimpleScore::of(2));
        assert_eq!(-a, SimpleScore::of(3));
        assert_eq!(a + SimpleScore::zero(), a);
    }

    #[test]
    fn feasibility() {
        assert!(SimpleScore::of(0).is_feasible());
        assert!(!SimpleScore::of(-1).is_feasible());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(SimpleScore::parse("-42").unwrap(), SimpleScore::of(-42));
        assert_eq!(SimpleScore::of(-42).to_string(), "-42");
        assert!(SimpleScore::parse("abc").is_err());
    }

    #[test]
    fn level_numbers_round_trip() {
        let score = SimpleScore::of(-9);
        assert_eq!(SimpleScore::from_level_numbers(&score.to_level_numbers()), score);
    }
}

mod hard_soft_score {
    use super::*;

    #[test]
    fn hard_dominates_soft() {
        let infeasible = HardSoftScore::of(-1, 0);
        let feasible = HardSoftScore::of(0, -10_000);
        assert!(feasible > infeasible);
    }

    #[test]
    fn soft_breaks_hard_ties() {
        assert!(HardSoftScore::of(0, -50) > HardSoftScore::of(0, -200));
    }

    #[test]
    fn arithmetic_group() {
        let a = HardSoftScore::of(-1, -10);
        let b = HardSoftScore::of(-2, 5);
        assert_eq!(a + b, HardSoftScore::of(-3, -5));
        assert_eq!((a + b) - b, a);
        assert_eq!(a + (-a), HardSoftScore::ZERO);
    }

    #[test]
    fn feasibility() {
        assert!(HardSoftScore::of(0, -100).is_feasible());
        assert!(!HardSoftScore::of(-1, 100).is_feasible());
    }

    #[test]
    fn parse_and_display() {
        let score = HardSoftScore::parse("0hard/-100soft").unwrap();
        assert_eq!(score, HardSoftScore::of(0, -100));
        assert_eq!(score.to_string(), "0hard/-100soft");

        assert!(HardSoftScore::parse("0hard").is_err());
        assert!(HardSoftScore::parse("0soft/-1hard").is_err());
    }

    #[test]
    fn level_labels() {
        assert_eq!(HardSoftScore::level_label(0), ScoreLevel::Hard);
        assert_eq!(HardSoftScore::level_label(1), ScoreLevel::Soft);
    }
}

mod hard_medium_soft_score {
    use super::*;

    #[test]
    fn lexicographic_ordering() {
        assert!(HardMediumSoftScore::of(0, -1, 0) > HardMediumSoftScore::of(-1, 0, 0));
        assert!(HardMediumSoftScore::of(0, 0, -5) > HardMediumSoftScore::of(0, -1, 0));
        assert!(HardMediumSoftScore::of(0, 0, -1) > HardMediumSoftScore::of(0, 0, -2));
    }

    #[test]
    fn parse_and_display() {
        let score = HardMediumSoftScore::parse("-1hard/2medium/-3soft").unwrap();
        assert_eq!(score, HardMediumSoftScore::of(-1, 2, -3));
        assert_eq!(score.to_string(), "-1hard/2medium/-3soft");
    }

    #[test]
    fn level_numbers_round_trip() {
        let score = HardMediumSoftScore::of(-1, 2, -3);
        assert_eq!(
            HardMediumSoftScore::from_level_numbers(&score.to_level_numbers()),
            score
        );
    }
}
