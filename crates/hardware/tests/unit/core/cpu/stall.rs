//! Port stalls: a held port freezes all state and the request is re-presented unchanged.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;
use crate::common::mocks::bus::ScriptedBus;
use rvseq_core::config::Config;
use rvseq_core::core::Core;
use rvseq_core::core::cpu::{ControlInputs, Stall};

#[rstest]
#[case(1)]
#[case(3)]
fn fetch_stall_holds_request(#[case] cycles: usize) {
    let mut core = Core::new();
    let mut bus = ScriptedBus::new()
        .with_program(0, &[asm().addi(1, 0, 5).build()])
        .stall_fetch(cycles);

    for _ in 0..cycles {
        let out = core.tick(&ControlInputs::RUN, &mut bus);
        assert_eq!(out.stall, Some(Stall::Fetch));
        assert!(out.retired.is_none());
        assert!(out.data.is_none());
        assert_eq!(core.pc(), 0);
        assert_eq!(core.regs.read(1), 0);
    }

    let out = core.tick(&ControlInputs::RUN, &mut bus);
    assert_eq!(out.stall, None);
    assert_eq!(out.retired.map(|r| r.pc), Some(0));
    assert_eq!(core.regs.read(1), 5);
    assert_eq!(core.pc(), 4);
    assert_eq!(bus.fetch_log.len(), cycles + 1);
    assert!(bus.fetch_log.iter().all(|r| r.address == 0));
}

#[test]
fn data_stall_holds_identical_store() {
    let mut core = Core::new();
    core.regs.write(1, 0x200);
    core.regs.write(2, 0xDEAD_BEEF);
    let mut bus = ScriptedBus::new()
        .with_program(0, &[asm().sw(1, 2, 4).build()])
        .stall_data(2);

    for _ in 0..2 {
        let out = core.tick(&ControlInputs::RUN, &mut bus);
        assert_eq!(out.stall, Some(Stall::Data));
        assert!(out.fetch.is_some());
        assert!(out.retired.is_none());
        assert_eq!(core.pc(), 0);
        assert_eq!(bus.word(0x204), 0);
    }

    let out = core.tick(&ControlInputs::RUN, &mut bus);
    assert!(out.retired.is_some());
    assert_eq!(bus.word(0x204), 0xDEAD_BEEF);
    assert_eq!(bus.data_log.len(), 3);
    assert!(bus.data_log.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(core.pc(), 4);
}

#[test]
fn data_stall_defers_load_writeback() {
    let mut core = Core::new();
    core.regs.write(1, 0x300);
    let mut bus = ScriptedBus::new()
        .with_program(0, &[asm().lw(1, 1, 0).build()])
        .with_word(0x300, 42)
        .stall_data(1);

    let out = core.tick(&ControlInputs::RUN, &mut bus);
    assert_eq!(out.stall, Some(Stall::Data));
    assert_eq!(core.regs.read(1), 0x300);

    let _ = core.tick(&ControlInputs::RUN, &mut bus);
    assert_eq!(core.regs.read(1), 42);
    assert_eq!(bus.data_log[0], bus.data_log[1]);
}

#[test]
fn stalled_wfi_does_not_sleep() {
    let mut core = Core::new();
    let mut bus = ScriptedBus::new()
        .with_program(0, &[asm().wfi().build()])
        .stall_fetch(1);

    let out = core.tick(&ControlInputs::RUN, &mut bus);
    assert!(!out.sleeping);
    let out = core.tick(&ControlInputs::RUN, &mut bus);
    assert!(out.sleeping);
}

#[test]
fn wait_states_from_config() {
    let mut config = Config::default();
    config.memory.data_wait_states = 2;
    let mut ctx = TestContext::with_config(&config).load_program(
        0,
        &[asm().lw(2, 0, 0x100).build(), asm().addi(3, 0, 1).build()],
    );
    ctx.write_word(0x100, 7);

    assert_eq!(ctx.tick().stall, Some(Stall::Data));
    assert_eq!(ctx.tick().stall, Some(Stall::Data));
    assert!(ctx.tick().retired.is_some());
    assert_eq!(ctx.get_reg(2), 7);
    assert!(ctx.tick().retired.is_some());
    assert_eq!(ctx.get_reg(3), 1);
    assert_eq!(ctx.sim.stats.stalls_data, 2);
    assert_eq!(ctx.sim.stats.instructions_retired, 2);
}

#[test]
fn fetch_wait_states_cost_per_instruction() {
    let mut config = Config::default();
    config.memory.fetch_wait_states = 1;
    let mut ctx = TestContext::with_config(&config)
        .load_program(0, &[asm().addi(1, 0, 1).build(), asm().addi(1, 1, 1).build()]);

    ctx.run(4);
    assert_eq!(ctx.get_reg(1), 2);
    assert_eq!(ctx.sim.stats.stalls_fetch, 2);
    assert_eq!(ctx.core().pc(), 8);
}

#[test]
fn fetch_wait_states_repeat_behind_data_stall() {
    let mut config = Config::default();
    config.memory.fetch_wait_states = 1;
    config.memory.data_wait_states = 1;
    let mut ctx = TestContext::with_config(&config).load_program(0, &[asm().lw(1, 0, 0x40).build()]);
    ctx.write_word(0x40, 11);

    let stalls: Vec<_> = (0..4).map(|_| ctx.tick().stall).collect();
    assert_eq!(
        stalls,
        [Some(Stall::Fetch), Some(Stall::Data), Some(Stall::Fetch), None]
    );
    assert_eq!(ctx.get_reg(1), 11);
    assert_eq!(ctx.sim.stats.stalls_fetch, 2);
    assert_eq!(ctx.sim.stats.stalls_data, 1);
}

#[rstest]
#[case(0, 2, 3)]
#[case(1, 2, 6)]
#[case(2, 1, 6)]
#[case(2, 0, 3)]
fn memory_access_cycle_cost(#[case] fetch_ws: u32, #[case] data_ws: u32, #[case] cycles: u64) {
    let mut config = Config::default();
    config.memory.fetch_wait_states = fetch_ws;
    config.memory.data_wait_states = data_ws;
    let mut ctx = TestContext::with_config(&config).load_program(0, &[asm().sw(0, 0, 0x40).build()]);

    let mut elapsed = 0;
    while ctx.tick().retired.is_none() {
        elapsed += 1;
        assert!(elapsed < 100);
    }
    assert_eq!(ctx.sim.stats.cycles, cycles);
}
