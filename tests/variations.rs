//! Tests the rules engine by counting variations (boop module)
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod variations {
    use boop_game::{GameState, Rules};
    use boop_game::boop::variations;

    mod starting_state {
        use super::count;

        #[test]
        fn depth_1() { assert_eq!(count("6/6/6/6/6/6 1 8-0 8-0", 1), 36); }

        #[test]
        fn depth_2() { assert_eq!(count("6/6/6/6/6/6 1 8-0 8-0", 2), 1260); }

        #[test]
        fn depth_3() { assert_eq!(count("6/6/6/6/6/6 1 8-0 8-0", 3), 42900); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count("6/6/6/6/6/6 1 8-0 8-0", 4), 1421952); }
    }

    #[test]
    fn several_lines() { assert_eq!(count("6/6/6/6/6/SS1SS1 1 4-0 8-0", 3), 31290); }

    #[test]
    fn big_pieces() { assert_eq!(count("6/6/6/6/2b3/bb4 1 7-1 5-0", 3), 100453); }

    #[test]
    fn small_boops_big() {
        let rules = Rules { small_boops_big: true, ..Rules::default() };
        assert_eq!(count_with("6/6/2b3/6/6/6 1 8-0 7-0", rules, 3), 39330);
    }

    #[test]
    fn forced_graduation() {
        let rules = Rules { pieces_per_player: 3, ..Rules::default() };
        assert_eq!(count_with("6/6/6/6/6/S1S3 1 1-0 3-0", rules, 4), 196175);
    }

    #[test]
    fn no_win_with_all_big_placed() {
        let rules = Rules { pieces_per_player: 3, win_with_all_big_placed: false, ..Rules::default() };
        assert_eq!(count_with("6/6/6/6/6/B1B3 1 0-1 3-0", rules, 4), 166343);
    }

    fn count(s: &str, depth: usize) -> usize {
        count_with(s, Rules::default(), depth)
    }

    fn count_with(s: &str, rules: Rules, depth: usize) -> usize {
        println!("\n{}", s);
        let state = GameState::from_notation(s, rules).unwrap();

        let count = variations::print(&state, depth);
        println!("Depth {} total:\t{:12}", depth, count);

        count
    }
}
