#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;
    use std::time::Duration;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use trireme::cli::{parse_command, run_interactive, Command};
    use trireme::driver::SessionDriver;
    use trireme::{
        parse_label, GameSession, Orientation, Phase, RandomStrategy, SessionConfig, ShipKind,
    };

    fn quick_driver(seed: u64) -> SessionDriver {
        let config = SessionConfig {
            settle_delay: Duration::ZERO,
        };
        SessionDriver::new(GameSession::with_strategy(
            config,
            SmallRng::seed_from_u64(seed),
            RandomStrategy::new(),
        ))
    }

    #[test]
    fn test_parse_place() {
        assert_eq!(
            parse_command("place Destroyer c3 V"),
            Ok(Command::Place {
                kind: ShipKind::Destroyer,
                anchor: parse_label("C3").unwrap(),
                orientation: Orientation::Vertical,
            })
        );
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse_command("random"), Ok(Command::Random));
        assert_eq!(parse_command("CONFIRM"), Ok(Command::Confirm));
        assert_eq!(parse_command("start"), Ok(Command::Start));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(
            parse_command("remove patrol"),
            Ok(Command::Remove(ShipKind::Patrol))
        );
        assert_eq!(
            parse_command("fire j10"),
            Ok(Command::Fire(parse_label("J10").unwrap()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("place frigate A1").is_err());
        assert!(parse_command("place carrier").is_err());
        assert!(parse_command("place carrier A1 diagonal").is_err());
        assert!(parse_command("fire K1").is_err());
        assert!(parse_command("fire A1 B2").is_err());
        assert!(parse_command("hello").is_err());
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let mut driver = quick_driver(5);
        let input = "random\nconfirm\nstart\nE5\nE5\nstatus\nquit\n";
        let mut out = Vec::new();
        run_interactive(&mut driver, Cursor::new(input), &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Battle begins!"));
        assert!(text.contains("You fire at E5"));
        assert!(text.contains("already fired at E5"));
        assert!(text.contains("Enemy waters:"));
        assert_eq!(driver.session().phase(), Phase::InBattle);
        assert_eq!(driver.session().stats().player_shots, 1);
    }

    #[tokio::test]
    async fn test_rejections_are_reported() {
        let mut driver = quick_driver(6);
        let input = "confirm\nplace patrol B2 v\nplace destroyer C3 v\n";
        let mut out = Vec::new();
        run_interactive(&mut driver, Cursor::new(input), &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("carrier has not been placed"));
        assert!(text.contains("Cannot place Trireme"));
        assert_eq!(driver.session().phase(), Phase::Placing);
    }
}
