use crate::harness::{PxlHarness, SvgHarness, TestHarness};
use crate::scenes;

mod frames;
mod grid;
mod labels;
mod svg;

fn check(res: Result<(), String>) {
    if let Err(msg) = res {
        panic!("{}", msg);
    }
}

#[test]
fn sine_is_reproducible() {
    check(PxlHarness::check_reproducible("sine", 400, 300, scenes::sine));
    check(SvgHarness::check_reproducible("sine", 400, 300, scenes::sine));
}

#[test]
fn four_frames_are_reproducible() {
    check(PxlHarness::check_reproducible("four_frames", 960, 640, scenes::four_frames));
    check(SvgHarness::check_reproducible("four_frames", 960, 640, scenes::four_frames));
}
