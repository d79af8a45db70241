mod common;

use battle_core::{BattleInput, CursorDirection, PhaseKind, Side, Timestamp};

use common::{charizard, fighter, pikachu, session};

const MENU_INPUTS: [BattleInput; 5] = [
    BattleInput::MoveCursor(CursorDirection::Up),
    BattleInput::MoveCursor(CursorDirection::Down),
    BattleInput::MoveCursor(CursorDirection::Left),
    BattleInput::MoveCursor(CursorDirection::Right),
    BattleInput::Confirm,
];

fn assert_frozen(battle: &mut battle_core::BattleSession, now: Timestamp) {
    let phase = battle.phase().clone();
    let cursor = battle.selected_move_index();
    let hp = (battle.player().hp(), battle.opponent().hp());

    for input in MENU_INPUTS.into_iter().chain([BattleInput::Restart]) {
        let report = battle.handle_input(input, now).unwrap();
        assert!(report.is_empty(), "{input:?} changed {:?}", phase.kind());
    }

    assert_eq!(battle.phase(), &phase);
    assert_eq!(battle.selected_move_index(), cursor);
    assert_eq!((battle.player().hp(), battle.opponent().hp()), hp);
}

#[test]
fn menu_is_locked_while_an_action_plays() {
    let mut battle = session(fighter(charizard()), fighter(pikachu()), 2);
    battle
        .handle_input(BattleInput::MoveCursor(CursorDirection::Right), Timestamp(0.0))
        .unwrap();
    battle.handle_input(BattleInput::Confirm, Timestamp(0.0)).unwrap();

    assert_eq!(battle.phase_kind(), PhaseKind::Animating);
    assert_frozen(&mut battle, Timestamp(0.5));

    battle.poll(Timestamp(1.5));
    assert_eq!(battle.phase_kind(), PhaseKind::PostActionWait);
    assert_frozen(&mut battle, Timestamp(2.0));

    battle.poll(Timestamp(2.5));
    assert_eq!(battle.turn_owner(), Side::Opponent);
    assert_frozen(&mut battle, Timestamp(3.0));
}

#[test]
fn restart_is_ignored_before_the_end() {
    let mut battle = session(fighter(charizard()), fighter(pikachu()), 0);
    let report = battle
        .handle_input(BattleInput::Restart, Timestamp(0.0))
        .unwrap();
    assert!(report.is_empty());
    assert_eq!(battle.generation(), 0);
    assert_eq!(battle.phase_kind(), PhaseKind::Selecting);
}

#[test]
fn ended_battle_only_takes_restart() {
    let player = fighter(pikachu()).with_hp(20);
    let mut battle = session(player, fighter(charizard()), 1);
    battle.handle_input(BattleInput::Confirm, Timestamp(0.0)).unwrap();
    for t in [1.5, 2.5, 4.0] {
        battle.poll(Timestamp(t));
    }
    assert_eq!(battle.phase_kind(), PhaseKind::BattleEnded);

    for input in MENU_INPUTS {
        assert!(battle.handle_input(input, Timestamp(5.0)).unwrap().is_empty());
    }
    assert_eq!(battle.phase_kind(), PhaseKind::BattleEnded);

    let report = battle
        .handle_input(BattleInput::Restart, Timestamp(5.0))
        .unwrap();
    assert!(!report.is_empty());
    assert_eq!(battle.phase_kind(), PhaseKind::Selecting);
    assert_eq!(battle.generation(), 1);
    assert_eq!(battle.round(), 0);
    assert_eq!(battle.selected_move_index(), 0);
    for side in Side::ALL {
        let combatant = battle.combatant(side);
        assert_eq!(combatant.hp(), combatant.max_hp());
        assert_eq!(combatant.displayed_hp(), f64::from(combatant.max_hp()));
    }
    assert!(battle.winner().is_none());
    assert!(battle.active_tween().is_none());
}
