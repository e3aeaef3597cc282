//! Integration tests for the main game loop

use crossterm::event::{Event, KeyCode, KeyEvent};

use tui_tanks::core::{GameEvent, GameState};
use tui_tanks::input::{FrameInput, InputHandler};
use tui_tanks::types::{Direction, TANK_START};

fn press(frame: &mut FrameInput, ih: &mut InputHandler, c: char) {
    frame.push_event(ih, Event::Key(KeyEvent::from(KeyCode::Char(c))));
}

/// One loop iteration: apply the frame's actions, then tick.
fn step(game: &mut GameState, ih: &mut InputHandler, frame: FrameInput) {
    for action in frame.actions {
        game.apply_action(action);
    }
    game.tick(ih.forward_held());
}

#[test]
fn test_rotate_fire_and_fly() {
    let mut game = GameState::new();
    let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);
    assert_eq!(game.tank.position(), TANK_START);

    let mut frame = FrameInput::default();
    press(&mut frame, &mut ih, 'd');
    press(&mut frame, &mut ih, ' ');

    for action in frame.actions {
        game.apply_action(action);
    }
    assert_eq!(game.tank.sprite_degrees(), 270, "rotated -90 degrees");
    assert_eq!(game.facing(), Direction::Right);
    assert_eq!(game.tank.projectiles().len(), 1);
    assert_eq!(game.tank.projectiles()[0].position(), (308, 311));

    game.tick(ih.forward_held());
    assert_eq!(game.tank.projectiles()[0].position(), (318, 311));
}

#[test]
fn test_forward_drives_until_released() {
    let mut game = GameState::new();
    let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);

    let mut frame = FrameInput::default();
    press(&mut frame, &mut ih, 'w');
    step(&mut game, &mut ih, frame);
    step(&mut game, &mut ih, FrameInput::default());
    assert_eq!(game.tank.position(), (250, 246));

    let mut frame = FrameInput::default();
    frame.push_event(
        &mut ih,
        Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('w'),
            crossterm::event::KeyModifiers::NONE,
            crossterm::event::KeyEventKind::Release,
        )),
    );
    step(&mut game, &mut ih, frame);
    assert_eq!(game.tank.position(), (250, 246));
}

#[test]
fn test_left_turn_then_drive() {
    let mut game = GameState::new();
    let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);

    let mut frame = FrameInput::default();
    press(&mut frame, &mut ih, 'a');
    press(&mut frame, &mut ih, 'w');
    step(&mut game, &mut ih, frame);

    assert_eq!(game.facing(), Direction::Left);
    assert_eq!(game.tank.sprite_degrees(), 90);
    assert_eq!(game.tank.position(), (248, 250));
}

#[test]
fn test_live_set_stays_bounded() {
    let mut game = GameState::new();
    let mut ih = InputHandler::new();

    for _ in 0..24 {
        let mut frame = FrameInput::default();
        press(&mut frame, &mut ih, ' ');
        step(&mut game, &mut ih, frame);
    }
    for _ in 0..200 {
        step(&mut game, &mut ih, FrameInput::default());
    }

    assert!(game.tank.projectiles().is_empty());
    let expired: u32 = game
        .drain_events()
        .iter()
        .filter_map(|ev| match ev {
            GameEvent::ProjectilesExpired { count } => Some(*count),
            _ => None,
        })
        .sum();
    assert_eq!(expired, 24);
}
