use hackatari_core::games::mspacman::{
    self, apply_always_edible, apply_inverted, apply_static_positions, apply_token_count, Ghost,
    Mode, ModificationState, EATEN, EDIBLE, HUNTING, POWER_PILL_CELL, TIMER_CELL,
};
use hackatari_core::{AtariRam, HackError, RamAccess};

fn noisy_ram() -> AtariRam {
    let bytes: Vec<u8> = (0..128u32).map(|i| (i * 37 % 251) as u8).collect();
    AtariRam::from_slice(&bytes)
}

#[test]
fn static_positions_are_idempotent() {
    let mut state = ModificationState::new();
    for ghost in Ghost::ALL {
        state.cage(ghost);
    }
    let mut once = noisy_ram();
    apply_static_positions(&mut once, &state);
    let mut twice = once.clone();
    apply_static_positions(&mut twice, &state);
    assert_eq!(once, twice);
    assert_eq!((once.ram(6), once.ram(12)), (93, 80));
    assert_eq!((once.ram(9), once.ram(15)), (83, 67));
}

#[test]
fn token_count_layouts() {
    let expected = [(0, [80, 80, 0]), (1, [64, 80, 8]), (2, [0, 80, 40]), (3, [0, 64, 46])];
    for (count, [a, b, c]) in expected {
        let mut ram = noisy_ram();
        apply_token_count(&mut ram, count);
        assert_eq!((ram.ram(62), ram.ram(95), ram.ram(117)), (a, b, c), "count {}", count);
    }

    let mut ram = noisy_ram();
    apply_token_count(&mut ram, 4);
    assert_eq!(ram, noisy_ram());
}

#[test]
fn eaten_ghosts_respawn_edible() {
    for ghost in Ghost::ALL {
        let mut ram = noisy_ram();
        ram.set_ram(ghost.state_cell(), EATEN);
        apply_always_edible(&mut ram);
        assert_eq!(ram.ram(ghost.state_cell()), EDIBLE);
        assert_eq!((ram.ram(ghost.x_cell()), ram.ram(ghost.y_cell())), ghost.spawn());
    }
}

#[test]
fn always_edible_timer_floor() {
    for timer in 0..=255u8 {
        let mut ram = AtariRam::new();
        ram.set_ram(TIMER_CELL, timer);
        apply_always_edible(&mut ram);
        let expected = if timer < 250 { 255 } else { timer };
        assert_eq!(ram.ram(TIMER_CELL), expected, "timer {}", timer);
    }
}

#[test]
fn inverted_round_trip() {
    let mut state = ModificationState::new();
    assert_eq!((state.mode(), state.last_marker()), (Mode::Normal, 63));

    let mut ram = AtariRam::new();
    ram.set_ram(TIMER_CELL, 255);
    ram.set_ram(POWER_PILL_CELL, 10);
    apply_inverted(&mut ram, &mut state);
    assert_eq!(state.mode(), Mode::Inverted);
    assert_eq!(state.last_marker(), 10);
    assert_eq!(ram.ram(TIMER_CELL), 62);
    for ghost in Ghost::ALL {
        assert_eq!(ram.ram(ghost.state_cell()), HUNTING);
    }

    ram.set_ram(TIMER_CELL, 0);
    apply_inverted(&mut ram, &mut state);
    assert_eq!(state.mode(), Mode::Normal);
    assert_eq!(ram.ram(TIMER_CELL), 190);
    for ghost in Ghost::ALL {
        assert_eq!(ram.ram(ghost.state_cell()), EDIBLE);
    }
}

#[test]
fn marker_jitter_is_ignored() {
    for marker in 60..=66u8 {
        let mut state = ModificationState::new();
        let mut ram = AtariRam::new();
        ram.set_ram(TIMER_CELL, 255);
        ram.set_ram(POWER_PILL_CELL, marker);
        apply_inverted(&mut ram, &mut state);
        assert_eq!(state.mode(), Mode::Normal, "marker {}", marker);
        assert_eq!(state.last_marker(), 63);
        assert_eq!(ram.ram(TIMER_CELL), 255);
    }

    let mut state = ModificationState::new();
    let mut ram = AtariRam::new();
    ram.set_ram(TIMER_CELL, 255);
    ram.set_ram(POWER_PILL_CELL, 67);
    apply_inverted(&mut ram, &mut state);
    assert_eq!(state.mode(), Mode::Inverted);
}

#[test]
fn power_parameter_is_validated() {
    assert_eq!(
        mspacman::configure(&["inverted", "power5"]).unwrap_err(),
        HackError::InvalidParameter {
            modification: "power5".to_string(),
            value: "5".to_string(),
        }
    );

    let mut hooks = mspacman::configure(&["power2"]).unwrap();
    assert_eq!((hooks.step_len(), hooks.reset_len()), (0, 1));
    let mut ram = noisy_ram();
    hooks.on_reset(&mut ram);
    assert_eq!((ram.ram(62), ram.ram(95), ram.ram(117)), (0, 80, 40));
}

#[test]
fn unknown_names_yield_no_hooks() {
    let hooks = mspacman::configure(&["nonexistent_mod"]).unwrap();
    assert!(hooks.is_empty());
    let none: [&str; 0] = [];
    assert!(mspacman::configure(&none).unwrap().is_empty());
}

#[test]
fn inverted_hooks_share_state() {
    let mut hooks = mspacman::configure(&["inverted"]).unwrap();
    let mut ram = AtariRam::new();
    hooks.on_reset(&mut ram);
    ram.set_ram(POWER_PILL_CELL, 63);
    hooks.on_step(&mut ram);
    assert_eq!(ram.ram(Ghost::Red.state_cell()), EDIBLE);

    // pill eaten
    ram.set_ram(POWER_PILL_CELL, 40);
    hooks.on_step(&mut ram);
    assert_eq!(ram.ram(Ghost::Red.state_cell()), HUNTING);
    assert_eq!(ram.ram(TIMER_CELL), 62);

    // ghost eaten while hunting stays eaten
    ram.set_ram(Ghost::Red.state_cell(), EATEN);
    ram.set_ram(TIMER_CELL, 20);
    hooks.on_step(&mut ram);
    assert_eq!(ram.ram(Ghost::Red.state_cell()), EATEN);
    assert_eq!(ram.ram(TIMER_CELL), 20);

    // a reset forgets the pill and the old baseline
    hooks.on_reset(&mut ram);
    ram.set_ram(POWER_PILL_CELL, 62);
    hooks.on_step(&mut ram);
    assert_eq!(ram.ram(Ghost::Red.state_cell()), EDIBLE);
    assert_eq!(ram.ram(TIMER_CELL), 255);
}

#[test]
fn caged_and_edible_together() {
    let mut hooks = mspacman::configure(&["disable_orange", "edible_ghosts"]).unwrap();
    assert_eq!(hooks.step_len(), 2);
    let mut ram = AtariRam::new();
    ram.set_ram(Ghost::Orange.state_cell(), EATEN);
    hooks.on_step(&mut ram);
    // respawn runs after the cage, so the spawn point wins this frame
    assert_eq!((ram.ram(6), ram.ram(12)), (120, 50));
    hooks.on_step(&mut ram);
    assert_eq!((ram.ram(6), ram.ram(12)), (93, 80));
    assert_eq!(ram.ram(TIMER_CELL), 255);
}

#[test]
fn cage_after_edible_wins_the_frame() {
    let mut hooks =
        mspacman::configure(&["disable_orange", "edible_ghosts", "disable_red"]).unwrap();
    assert_eq!(hooks.step_len(), 3);
    let mut ram = AtariRam::new();
    ram.set_ram(Ghost::Orange.state_cell(), EATEN);
    hooks.on_step(&mut ram);
    assert_eq!(ram.ram(Ghost::Orange.state_cell()), EDIBLE);
    assert_eq!((ram.ram(6), ram.ram(12)), (93, 80));
    assert_eq!((ram.ram(9), ram.ram(15)), (83, 67));
}
