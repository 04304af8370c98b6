//! WFI, run-enable gating and the wake check.

use pretty_assertions::assert_eq;

use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;
use crate::common::mocks::bus::ScriptedBus;
use rvseq_core::config::Config;
use rvseq_core::core::Core;
use rvseq_core::core::arch::mode::RunState;
use rvseq_core::core::cpu::ControlInputs;
use rvseq_core::sim::RunOutcome;

fn sleeping_core() -> (Core, ScriptedBus) {
    let mut core = Core::new();
    let mut bus = ScriptedBus::new().with_program(
        0,
        &[asm().wfi().build(), asm().addi(1, 0, 1).build(), asm().wfi().build()],
    );
    let out = core.tick(&ControlInputs::RUN, &mut bus);
    assert!(out.retired.is_some());
    assert!(out.sleeping);
    (core, bus)
}

#[test]
fn wfi_retires_and_sleeps() {
    let (core, _) = sleeping_core();
    assert_eq!(core.state(), RunState::Waiting);
    assert!(core.sleeping());
    assert_eq!(core.pc(), 4);
}

#[test]
fn no_fetch_while_waiting() {
    let (mut core, mut bus) = sleeping_core();
    for _ in 0..5 {
        let out = core.tick(&ControlInputs::RUN, &mut bus);
        assert!(out.fetch.is_none());
        assert!(out.retired.is_none());
        assert!(out.sleeping);
    }
    assert_eq!(bus.fetch_log.len(), 1);
    assert_eq!(core.pc(), 4);
}

#[test]
fn interrupt_wakes_in_same_cycle() {
    let (mut core, mut bus) = sleeping_core();
    let inputs = ControlInputs {
        interrupt_vector: 1 << 7,
        ..ControlInputs::RUN
    };
    let out = core.tick(&inputs, &mut bus);
    assert!(!out.sleeping);
    assert_eq!(out.state, RunState::Running);
    assert_eq!(out.fetch.map(|f| f.address), Some(4));
    assert_eq!(core.regs.read(1), 1);
}

#[test]
fn debug_request_wakes() {
    let (mut core, mut bus) = sleeping_core();
    let inputs = ControlInputs {
        debug_request: true,
        ..ControlInputs::RUN
    };
    let out = core.tick(&inputs, &mut bus);
    assert!(out.retired.is_some());
    assert!(!core.sleeping());
}

#[test]
fn held_interrupt_makes_wfi_fall_through() {
    let mut core = Core::new();
    let mut bus = ScriptedBus::new()
        .with_program(0, &[asm().wfi().build(), asm().addi(1, 0, 9).build()]);
    let inputs = ControlInputs {
        interrupt_vector: 1,
        ..ControlInputs::RUN
    };
    assert!(core.tick(&inputs, &mut bus).sleeping);
    let out = core.tick(&inputs, &mut bus);
    assert!(!out.sleeping);
    assert_eq!(core.regs.read(1), 9);
}

#[test]
fn run_enable_does_not_wake() {
    let (mut core, mut bus) = sleeping_core();
    let low = ControlInputs::default();
    assert!(core.tick(&low, &mut bus).sleeping);
    assert!(core.tick(&ControlInputs::RUN, &mut bus).sleeping);
}

#[test]
fn wake_with_run_enable_low_halts() {
    let (mut core, mut bus) = sleeping_core();
    let inputs = ControlInputs {
        interrupt_vector: 1,
        ..ControlInputs::default()
    };
    let out = core.tick(&inputs, &mut bus);
    assert_eq!(out.state, RunState::Halted);
    assert!(!out.sleeping);
    assert!(out.fetch.is_none());

    let out = core.tick(&ControlInputs::RUN, &mut bus);
    assert_eq!(out.retired.map(|r| r.pc), Some(4));
}

#[test]
fn run_enable_low_freezes_pc() {
    let mut core = Core::new();
    let mut bus = ScriptedBus::new().with_program(
        0,
        &[asm().addi(1, 0, 1).build(), asm().addi(2, 0, 2).build()],
    );
    let _ = core.tick(&ControlInputs::RUN, &mut bus);

    for _ in 0..3 {
        let out = core.tick(&ControlInputs::default(), &mut bus);
        assert_eq!(out.state, RunState::Halted);
        assert!(out.fetch.is_none());
        assert!(!out.sleeping);
    }
    assert_eq!(core.pc(), 4);
    assert_eq!(bus.fetch_log.len(), 1);

    let _ = core.tick(&ControlInputs::RUN, &mut bus);
    assert_eq!(core.regs.read(2), 2);
    assert_eq!(core.pc(), 8);
}

#[test]
fn reset_core_waits_for_run_enable() {
    let mut core = Core::new();
    let mut bus = ScriptedBus::new();
    let out = core.tick(&ControlInputs::default(), &mut bus);
    assert_eq!(out.state, RunState::Halted);
    assert!(bus.fetch_log.is_empty());
}

#[test]
fn simulator_sleeps_until_scheduled_interrupt() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[asm().wfi().build(), asm().addi(1, 0, 1).build(), asm().wfi().build()],
    );
    ctx.sim.schedule_interrupt(5, 0b10);

    assert_eq!(ctx.sim.run(100), RunOutcome::Sleeping { pc: 12 });
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.sim.stats.cycles, 7);
    assert_eq!(ctx.sim.stats.cycles_waiting, 4);
    assert_eq!(ctx.sim.stats.inst_system, 2);
}

#[test]
fn simulator_reports_halt() {
    let mut config = Config::default();
    config.control.run_enable = false;
    let mut ctx = TestContext::with_config(&config);
    assert_eq!(ctx.sim.run(10), RunOutcome::Halted);
    assert_eq!(ctx.sim.stats.cycles, 1);
}
