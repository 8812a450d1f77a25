#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::EntityId;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, Rect, SimTime};

    // ---- Rect overlap ----

    #[test]
    fn test_rect_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_rect_contained_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 4.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_rect_center() {
        let r = Position::new(10.0, 20.0).rect(30.0, 30.0);
        assert_eq!(r.center(), Position::new(25.0, 35.0));
        assert!((r.bottom() - 50.0).abs() < 1e-12);
    }

    // ---- Enemy kinds ----

    #[test]
    fn test_enemy_kind_scores() {
        assert_eq!(EnemyKind::Basic.score_value(), 100);
        assert_eq!(EnemyKind::Fast.score_value(), 200);
        assert_eq!(EnemyKind::Tank.score_value(), 300);
    }

    #[test]
    fn test_enemy_kind_speeds() {
        assert!((EnemyKind::Basic.speed() - ENEMY_BASE_SPEED).abs() < 1e-12);
        assert!((EnemyKind::Fast.speed() - ENEMY_BASE_SPEED * 1.5).abs() < 1e-12);
        assert!((EnemyKind::Tank.speed() - ENEMY_BASE_SPEED * 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_enemy_colors_are_distinct() {
        assert_ne!(EnemyKind::Basic.color(), EnemyKind::Fast.color());
        assert_ne!(EnemyKind::Fast.color(), EnemyKind::Tank.color());
        assert_ne!(EnemyKind::Basic.color(), EnemyKind::Tank.color());
    }

    // ---- Phases ----

    #[test]
    fn test_phase_default_is_menu() {
        assert_eq!(GamePhase::default(), GamePhase::Menu);
        assert!(!GamePhase::Menu.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Victory.is_terminal());
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..NOMINAL_FPS {
            time.advance(NOMINAL_DT);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Constants ----

    #[test]
    fn test_player_bounds_constants() {
        assert!((PLAYER_MAX_X - 760.0).abs() < 1e-12);
        assert!(PLAYER_START_X >= 0.0 && PLAYER_START_X <= PLAYER_MAX_X);
        assert!(PLAYER_Y + PLAYER_HEIGHT <= PLAY_AREA_HEIGHT);
    }

    #[test]
    fn test_spawn_grid_fits_play_area() {
        // Rightmost staggered column still lies fully inside the play area.
        let max_x = SPAWN_MARGIN_X
            + (SPAWN_COLUMNS - 1) as f64 * SPAWN_SPACING_X
            + SPAWN_SPACING_X / 2.0
            + ENEMY_WIDTH;
        assert!(max_x <= PLAY_AREA_WIDTH);
        assert!(SPAWN_TOP_Y + ENEMY_HEIGHT <= 0.0);
    }

    // ---- Wire format ----

    #[test]
    fn test_command_tagged_format() {
        let json = serde_json::to_string(&PlayerCommand::MoveBy { dx: -12.5 }).unwrap();
        assert_eq!(json, r#"{"type":"MoveBy","dx":-12.5}"#);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Fire);
    }

    #[test]
    fn test_event_tagged_format() {
        let event = GameEvent::EnemyDestroyed {
            enemy_id: EntityId(7),
            bullet_id: EntityId(9),
            kind: EnemyKind::Tank,
            points: 300,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.starts_with(r#"{"type":"EnemyDestroyed""#));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Menu);
        assert!(back.enemies.is_empty());
        assert!(back.next_wave_in_secs.is_none());
    }
}
