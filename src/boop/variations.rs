//! Module for counting and printing the number of variations from a given state
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::boop::*;

/// Print the number of variations of the given `depth` for each legal action from `state`
pub fn print(state: &GameState, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    let mut total = 0;

    for action in state.actions() {
        let next = successor(state, &action);
        let count = count(&next, depth - 1);
        total += count;
        println!("\t{:10}\t{:12}\t{}", action, count, next);
    }

    total
}

/// Count the number of variations of the given `depth` from `state`
///
/// Each action counts as one ply, including choosing a line or a piece to graduate. A finished
/// state has no actions, so it only counts as a variation at depth 0.
pub fn count(state: &GameState, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    state.actions().iter().map(|action| count(&successor(state, action), depth - 1)).sum()
}

/// The state after `action`, which must be one of `state.actions()`
fn successor(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();
    next.apply(action).expect("INFALLIBLE");
    next
}
