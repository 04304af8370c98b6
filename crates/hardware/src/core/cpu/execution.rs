//! Per-Cycle Step Function.
//!
//! This module implements the clock edge of the single-cycle core. Each call to
//! [`Core::tick`] performs the following:
//! 1. **Scan Override:** While scan mode is active, clocks the scan chain and nothing else.
//! 2. **Run Control:** Resolves the run state from run-enable and the level-sensitive wake check.
//! 3. **Execution:** Fetch, decode, operand select, ALU, next-PC and data handshake.
//! 4. **Commit:** Register writeback, PC update and WFI entry, all skipped while a port stalls.

use tracing::{debug, trace, warn};

use super::Core;
use crate::common::constants::{INSTRUCTION_SIZE, PC_ALIGN_MASK};
use crate::core::arch::mode::RunState;
use crate::core::bus::{CoreBus, DataRequest, FetchRequest};
use crate::core::control::{self, OpASrc, OpBSrc, PcSrc, WbSrc};
use crate::core::units::{alu::Alu, bru, lsu};
use crate::isa::abi::REG_ZERO;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::OpClass;

/// External control inputs, sampled once per cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInputs {
    /// Level that enables instruction fetch.
    pub run_enable: bool,
    /// Interrupt lines; any set bit wakes a waiting core.
    pub interrupt_vector: u32,
    /// External debug request; also wakes a waiting core.
    pub debug_request: bool,
    /// Scan mode select; suspends execution while high.
    pub scan_enable: bool,
    /// Serial input of the scan chain.
    pub scan_in: bool,
}

impl ControlInputs {
    /// Inputs with only run-enable asserted.
    pub const RUN: Self = Self {
        run_enable: true,
        interrupt_vector: 0,
        debug_request: false,
        scan_enable: false,
        scan_in: false,
    };

    /// Returns true when the inputs wake a waiting core.
    pub const fn wake(&self) -> bool {
        self.interrupt_vector != 0 || self.debug_request
    }
}

/// Port that held the core this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stall {
    /// The instruction port did not report ready.
    Fetch,
    /// The data port did not report ready.
    Data,
}

/// Port error flags observed this cycle.
///
/// An error completes the transfer like a normal response; the flags only make it visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortErrors {
    /// The instruction port reported an error.
    pub fetch: bool,
    /// The data port reported an error.
    pub data: bool,
}

/// Register write committed by a retired instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Writeback {
    /// Destination register (never 0).
    pub rd: usize,
    /// Value written.
    pub value: u32,
}

/// Summary of the instruction retired this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Decoded operation class.
    pub class: OpClass,
    /// False when the encoding retired as a no-op.
    pub legal: bool,
    /// True when a conditional branch redirected the PC.
    pub taken: bool,
    /// Program counter committed for the next cycle.
    pub next_pc: u32,
    /// Register write, if any.
    pub writeback: Option<Writeback>,
}

/// Everything the core presented or committed during one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutputs {
    /// Run state at the end of the cycle.
    pub state: RunState,
    /// True while scan mode replaced execution.
    pub scanning: bool,
    /// Instruction-port request asserted this cycle.
    pub fetch: Option<FetchRequest>,
    /// Data-port request asserted this cycle.
    pub data: Option<DataRequest>,
    /// Port that held the core, if any.
    pub stall: Option<Stall>,
    /// Instruction retired this cycle.
    pub retired: Option<Retired>,
    /// The `sleeping` output: true iff the core is waiting for an interrupt.
    pub sleeping: bool,
    /// Serial output of the scan chain.
    pub scan_out: bool,
    /// Port errors observed this cycle.
    pub errors: PortErrors,
}

impl Core {
    /// Advances the core by one clock cycle.
    ///
    /// Requests are presented to `bus` in the order fetch, then data; the data port is only
    /// driven once the fetch for this cycle has completed. If either port is not ready, the
    /// cycle commits nothing and the same requests are rebuilt from unchanged state next cycle.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Control inputs sampled for this cycle.
    /// * `bus` - The memory side answering the instruction and data ports.
    pub fn tick(&mut self, inputs: &ControlInputs, bus: &mut impl CoreBus) -> TickOutputs {
        if inputs.scan_enable {
            if !self.scan.is_active() {
                debug!(pc = format_args!("{:#010x}", self.pc), "scan mode entered");
            }
            let scan_out = self.scan.shift(self.pc, inputs.scan_in);
            return self.outputs(TickOutputs {
                scanning: true,
                scan_out,
                ..TickOutputs::default()
            });
        }
        if self.scan.is_active() {
            self.scan.release();
            debug!("scan mode exited");
        }

        self.update_run_state(inputs);
        let mut out = TickOutputs::default();
        if !self.state.fetches() {
            return self.outputs(out);
        }

        let pc = self.pc;
        let fetch = FetchRequest { address: pc };
        let fetched = bus.fetch(&fetch);
        out.fetch = Some(fetch);
        if !fetched.ready {
            out.stall = Some(Stall::Fetch);
            return self.outputs(out);
        }
        if fetched.error {
            warn!(
                pc = format_args!("{pc:#010x}"),
                access = ?fetch.access_type(),
                "instruction port error, executing returned word"
            );
            out.errors.fetch = true;
        }

        let inst = fetched.read_data;
        let d = decode(inst);
        let ctrl = control::generate(&d);

        let rs1 = self.regs.read(d.rs1);
        let rs2 = self.regs.read(d.rs2);
        let imm = d.imm as u32;

        let op_a = match ctrl.a_src {
            OpASrc::Reg1 => rs1,
            OpASrc::Pc => pc,
            OpASrc::Zero => 0,
        };
        let op_b = match ctrl.b_src {
            OpBSrc::Imm => imm,
            OpBSrc::Reg2 => rs2,
        };
        let alu_out = Alu::execute(ctrl.alu, op_a, op_b);

        let pc_plus_4 = pc.wrapping_add(INSTRUCTION_SIZE);
        let taken = matches!(ctrl.pc_src, PcSrc::Branch)
            && matches!(bru::taken(d.funct3, rs1, rs2), Some(true));
        let target = match ctrl.pc_src {
            PcSrc::Next => pc_plus_4,
            PcSrc::Branch if taken => pc.wrapping_add(imm),
            PcSrc::Branch => pc_plus_4,
            PcSrc::Jump => pc.wrapping_add(imm),
            PcSrc::JumpReg => alu_out & !1,
        };

        let mut load_data = 0;
        if ctrl.accesses_memory() {
            let req = DataRequest {
                write_enable: ctrl.mem_write,
                byte_enable: lsu::byte_lanes(ctrl.width, alu_out),
                address: alu_out,
                write_data: rs2,
            };
            let resp = bus.data(&req);
            out.data = Some(req);
            if !resp.ready {
                out.stall = Some(Stall::Data);
                return self.outputs(out);
            }
            if resp.error {
                warn!(
                    pc = format_args!("{pc:#010x}"),
                    addr = format_args!("{alu_out:#010x}"),
                    access = ?req.access_type(),
                    "data port error, transfer treated as complete"
                );
                out.errors.data = true;
            }
            load_data = resp.read_data;
        }

        let mut writeback = None;
        if ctrl.reg_write && d.rd != REG_ZERO {
            let value = match ctrl.wb_src {
                WbSrc::Alu => alu_out,
                WbSrc::Mem => lsu::extend_load(load_data, alu_out, ctrl.width, ctrl.signed_load),
                WbSrc::PcPlus4 => pc_plus_4,
            };
            self.regs.write(d.rd, value);
            writeback = Some(Writeback { rd: d.rd, value });
        }

        let next_pc = target & !PC_ALIGN_MASK;
        if target != next_pc {
            warn!(
                pc = format_args!("{pc:#010x}"),
                target = format_args!("{target:#010x}"),
                "jump target not word aligned, low bits dropped"
            );
        }
        self.pc = next_pc;

        trace!(
            pc = format_args!("{pc:#010x}"),
            inst = format_args!("{inst:#010x}"),
            "{}",
            disassemble(inst)
        );

        if ctrl.is_wfi {
            self.state = RunState::Waiting;
            debug!(pc = format_args!("{pc:#010x}"), "WFI retired, waiting for interrupt");
        }

        out.retired = Some(Retired {
            pc,
            inst,
            class: d.class,
            legal: ctrl.legal,
            taken,
            next_pc,
            writeback,
        });
        self.outputs(out)
    }

    /// Applies run-enable gating and the wake check, logging any transition.
    fn update_run_state(&mut self, inputs: &ControlInputs) {
        let next = self.state.resolve(inputs.run_enable, inputs.wake());
        if next == self.state {
            return;
        }
        if self.state == RunState::Waiting {
            debug!(
                irq = format_args!("{:#x}", inputs.interrupt_vector),
                debug_request = inputs.debug_request,
                to = %next,
                "woken from WFI"
            );
        } else {
            debug!(
                from = %self.state,
                to = %next,
                pc = format_args!("{:#010x}", self.pc),
                "run state changed"
            );
        }
        self.state = next;
    }

    /// Fills in the state-derived outputs.
    const fn outputs(&self, out: TickOutputs) -> TickOutputs {
        TickOutputs {
            state: self.state,
            sleeping: matches!(self.state, RunState::Waiting),
            ..out
        }
    }
}
