//! Brute-force correction used when the tree structure alone has nothing to offer.
//!
//! The search only ever talks to the store through a membership predicate, so
//! both trie flavours share it. Starting from the last position and moving
//! left, each letter is swept down to `a` and then up to `z`; after every step
//! of that letter, each later position gets its own full down-then-up sweep.
//! The first candidate the predicate accepts wins. When a length is exhausted,
//! the last character of the (already mutated) buffer is dropped and the
//! sweep starts over, down to the empty buffer which yields `NotFound`.
//!
//! The answer is whatever this fixed scan order reaches first. It is
//! reproducible, not edit-distance optimal.

use log::debug;

use crate::alphabet::is_mutable;
use crate::wordlist::searchconfig::SearchConfig;
use crate::wordlist::store::Suggestion;

#[derive(Clone, Copy, Debug)]
enum Direction {
    Down,
    Up,
}

impl Direction {
    const SWEEP: [Direction; 2] = [Direction::Down, Direction::Up];

    fn can_step(self, c: char) -> bool {
        match self {
            Direction::Down => c > 'a',
            Direction::Up => c < 'z',
        }
    }

    fn step(self, c: char) -> char {
        match self {
            Direction::Down => (c as u8 - 1) as char,
            Direction::Up => (c as u8 + 1) as char,
        }
    }
}

pub fn mutate<F>(word: &str, mut is_member: F) -> Suggestion
    where F: FnMut(&str) -> bool {
    let mut probes: usize = 0;
    let mut counted = |candidate: &str| {
        probes += 1;
        is_member(candidate)
    };

    let mut buffer: Vec<char> = word.chars().collect();
    let mut result = Suggestion::NotFound;
    while !buffer.is_empty() {
        if let Some(found) = sweep_length(&mut buffer, &mut counted) {
            result = Suggestion::Found(found);
            break;
        }
        buffer.pop();
    }

    debug!("mutation search for {:?} made {} membership tests -> {}", word, probes, result);
    result
}

/// Same as [`mutate`], but gives up straight away on words the config rules out.
pub fn mutate_with<F>(word: &str, config: &SearchConfig, is_member: F) -> Suggestion
    where F: FnMut(&str) -> bool {
    if !config.allows_mutation(word) {
        debug!("{:?} is longer than {:?}, skipping mutation search", word, config.max_word_len);
        return Suggestion::NotFound;
    }
    mutate(word, is_member)
}

fn probe<F>(buffer: &[char], is_member: &mut F) -> Option<String>
    where F: FnMut(&str) -> bool {
    let candidate: String = buffer.iter().collect();
    if is_member(&candidate) {
        Some(candidate)
    } else {
        None
    }
}

fn sweep_length<F>(buffer: &mut [char], is_member: &mut F) -> Option<String>
    where F: FnMut(&str) -> bool {
    for index in (0..buffer.len()).rev() {
        if !is_mutable(buffer[index]) {
            continue;
        }
        for direction in Direction::SWEEP {
            while direction.can_step(buffer[index]) {
                if let Some(found) = probe(buffer, is_member) {
                    return Some(found);
                }
                buffer[index] = direction.step(buffer[index]);

                for trailing in index + 1..buffer.len() {
                    if let Some(found) = sweep_position(buffer, trailing, is_member) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}

fn sweep_position<F>(buffer: &mut [char], position: usize, is_member: &mut F) -> Option<String>
    where F: FnMut(&str) -> bool {
    if !is_mutable(buffer[position]) {
        return None;
    }
    for direction in Direction::SWEEP {
        while direction.can_step(buffer[position]) {
            if let Some(found) = probe(buffer, is_member) {
                return Some(found);
            }
            buffer[position] = direction.step(buffer[position]);
        }
    }
    None
}
