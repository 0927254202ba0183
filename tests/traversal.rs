//! Player tests: stepping, selections, restart and cards.
mod common;
use common::*;
use processflow::player::SelectionSkipReason;
use processflow::prelude::*;

fn branching_player() -> Player {
    Player::from_output(resolve(create_branching_workflow())).expect("graph has a root")
}

/// Walks up to the decision block and returns its id.
fn walk_to_decision(player: &mut Player) -> BlockId {
    assert_eq!(player.next_step(), StepMove::Moved(StepCursor::At(0)));
    assert_eq!(player.next_step(), StepMove::Moved(StepCursor::At(1)));
    player.current_step().expect("at the decision").id
}

fn displayed_names(player: &Player) -> Vec<&str> {
    player
        .paths_to_display()
        .iter()
        .map(|p| p.name.as_str())
        .collect()
}

#[cfg(test)]
mod stepping_tests {
    use super::*;

    #[test]
    fn test_starts_before_first_step() {
        let player = branching_player();
        assert_eq!(player.cursor(), StepCursor::NotStarted);
        assert!(player.current_step().is_none());
        assert_eq!(displayed_names(&player), vec!["Main"]);

        let titles: Vec<_> = player
            .steps()
            .iter()
            .filter_map(|b| b.display_title())
            .collect();
        assert_eq!(titles, vec!["Intro", "Approved?"]);
    }

    #[test]
    fn test_next_is_blocked_until_an_option_is_picked() {
        let mut player = branching_player();
        let decision = walk_to_decision(&mut player);

        assert_eq!(
            player.next_step(),
            StepMove::Blocked { block_id: decision }
        );
        assert_eq!(player.cursor(), StepCursor::At(1));

        player.select_option(Id::Real(2), decision);
        assert_eq!(player.next_step(), StepMove::Moved(StepCursor::At(2)));
        assert_eq!(player.current_step().and_then(|b| b.display_title()), Some("Ship"));
        assert_eq!(player.next_step(), StepMove::Moved(StepCursor::Completed));
        assert!(player.is_completed());
        assert_eq!(player.next_step(), StepMove::AtBoundary);
    }

    #[test]
    fn test_previous_stops_at_start() {
        let mut player = branching_player();
        assert_eq!(player.previous_step(), StepMove::AtBoundary);

        player.next_step();
        assert_eq!(
            player.previous_step(),
            StepMove::Moved(StepCursor::NotStarted)
        );
        assert_eq!(player.previous_step(), StepMove::AtBoundary);
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn test_options_for_decision() {
        let mut player = branching_player();
        let decision = walk_to_decision(&mut player);

        let options = player.options_for(decision);
        let names: Vec<_> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Yes", "No"]);
        assert!(options.iter().all(|o| !o.selected));

        player.select_option(Id::Real(2), decision);
        let options = player.options_for(decision);
        assert!(options[0].selected);
        assert!(!options[1].selected);
    }

    #[test]
    fn test_selection_appends_a_fresh_copy() {
        let mut player = branching_player();
        let decision = walk_to_decision(&mut player);

        let SelectionOutcome::Selected { path_id } = player.select_option(Id::Real(2), decision)
        else {
            panic!("selection should succeed");
        };
        assert!(path_id.is_synthetic());
        assert_eq!(displayed_names(&player), vec!["Main", "Yes"]);

        let copy = &player.paths_to_display()[1];
        assert_eq!(copy.id, path_id);
        assert_eq!(copy.parent_blocks[0].block_id, decision);
        assert!(copy.blocks.iter().all(|b| b.id.is_synthetic()));
        assert!(player.copy_paths().iter().any(|p| p.id == path_id));
        assert_eq!(
            player.selected_options(),
            &[Selection {
                path_id,
                block_id: decision
            }]
        );

        // Selecting the same copy again changes nothing.
        assert_eq!(
            player.select_option(path_id, decision),
            SelectionOutcome::AlreadySelected
        );
        assert_eq!(player.paths_to_display().len(), 2);
    }

    #[test]
    fn test_reselecting_replaces_the_previous_branch() {
        let mut player = branching_player();
        let decision = walk_to_decision(&mut player);

        player.select_option(Id::Real(2), decision);
        player.select_option(Id::Real(3), decision);

        assert_eq!(displayed_names(&player), vec!["Main", "No"]);
        assert_eq!(player.selected_options().len(), 1);
        let titles: Vec<_> = player
            .steps()
            .iter()
            .filter_map(|b| b.display_title())
            .collect();
        assert_eq!(titles, vec!["Intro", "Approved?", "Reject"]);
    }

    #[test]
    fn test_reselecting_drops_nested_selections() {
        let mut def = create_branching_workflow();
        def.stroke_lines = vec![stroke_line(21, 11, "Start over")];
        let mut player = Player::from_output(resolve(def)).expect("graph has a root");
        let decision = walk_to_decision(&mut player);

        player.select_option(Id::Real(2), decision);
        player.next_step();
        let ship = player.current_step().expect("at ship").id;
        let again = player.options_for(ship)[1].path_id;
        player.select_option(again, ship);
        assert_eq!(displayed_names(&player), vec!["Main", "Yes", "Start over"]);
        assert_eq!(player.selected_options().len(), 2);

        player.select_option(Id::Real(3), decision);
        assert_eq!(displayed_names(&player), vec!["Main", "No"]);
        assert_eq!(player.selected_options().len(), 1);
        assert_eq!(player.selected_options()[0].block_id, decision);
    }

    #[test]
    fn test_copies_never_reuse_builder_ids() {
        let mut def = create_branching_workflow();
        def.stroke_lines = vec![stroke_line(11, 31, "Shortcut")];
        let output = resolve(def);
        let taken = all_ids(&output.graph.paths);
        let mut player = Player::from_output(output).expect("graph has a root");

        player.next_step();
        let intro = player.current_step().expect("at intro").id;
        let shortcut = player.options_for(intro)[1].path_id;
        player.select_option(shortcut, intro);

        let copy = player.paths_to_display().last().expect("copy displayed");
        assert!(!taken.contains(&copy.id));
        for block in &copy.blocks {
            assert!(!taken.contains(&block.id));
        }
    }

    #[test]
    fn test_invalid_selections_are_recorded() {
        let mut player = branching_player();

        assert_eq!(
            player.select_option(Id::Real(404), Id::Real(12)),
            SelectionOutcome::Skipped(SelectionSkipReason::UnknownOptionPath)
        );
        assert_eq!(
            player.select_option(Id::Real(2), Id::Real(31)),
            SelectionOutcome::Skipped(SelectionSkipReason::BlockNotDisplayed)
        );
        assert_eq!(player.skipped_selections().len(), 2);
        assert_eq!(displayed_names(&player), vec!["Main"]);
        assert!(player.selected_options().is_empty());
    }

    #[test]
    fn test_restart() {
        let mut player = branching_player();
        let decision = walk_to_decision(&mut player);
        player.select_option(Id::Real(2), decision);
        player.select_option(Id::Real(3), decision);
        player.next_step();

        player.restart();

        assert_eq!(player.paths_to_display(), std::slice::from_ref(player.root()));
        assert!(player.selected_options().is_empty());
        assert_eq!(player.cursor(), StepCursor::NotStarted);

        // The root was never touched by the earlier selections.
        let option_ids: Vec<_> = player
            .options_for(decision)
            .iter()
            .map(|o| o.path_id)
            .collect();
        assert_eq!(option_ids, vec![Id::Real(2), Id::Real(3)]);
    }
}

#[cfg(test)]
mod card_tests {
    use super::*;

    #[test]
    fn test_card_toggle() {
        let mut player = branching_player();
        let decision = walk_to_decision(&mut player);
        player.select_option(Id::Real(2), decision);
        player.next_step();
        let ship = player.current_step().expect("at ship").id;

        assert_eq!(player.card_state(ship), CardState::Collapsed);
        assert_eq!(player.toggle_card(ship), CardEffect::ScrollIntoView(ship));
        assert_eq!(player.card_state(ship), CardState::Expanded);
        assert_eq!(player.toggle_card(ship), CardEffect::None);
        assert_eq!(player.card_state(ship), CardState::Collapsed);
    }

    #[test]
    fn test_cards_without_image_stay_collapsed() {
        let mut player = branching_player();
        assert_eq!(player.toggle_card(Id::Real(11)), CardEffect::None);
        assert_eq!(player.card_state(Id::Real(11)), CardState::Collapsed);
    }
}
