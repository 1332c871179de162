//! Interrupt controller: queueing, immediate delivery, and RFI.

use crate::{Dcpu, IAQ_CAPACITY};

impl Dcpu {
    /// Queue or immediately deliver an interrupt carrying `message`.
    ///
    /// Called both for the software `INT` opcode and for host-side injection
    /// via [`Dcpu::raise_interrupt`]. Never called with a message dequeued
    /// from the pending queue while queueing is enabled — that path delivers
    /// directly in [`Dcpu::step`] instead.
    pub(crate) fn raise(&mut self, message: u16) {
        if self.iaq_en {
            if self.iaq_ind < IAQ_CAPACITY {
                self.iaq[self.iaq_ind] = message;
                self.iaq_ind += 1;
            } else {
                log::warn!("interrupt queue overflow, dropping message {message:#06x}");
            }
        } else {
            self.push(self.r[0]);
            self.push(self.pc);
            self.pc = self.ia;
            self.r[0] = message;
            self.iaq_en = true;
        }
    }

    /// Host-side interrupt injection (e.g. a timer tick).
    pub fn raise_interrupt(&mut self, message: u16) {
        self.raise(message);
    }

    /// If queueing is disabled and a message is pending, deliver exactly one
    /// and report that a step was consumed doing so (no instruction runs on
    /// that step).
    pub(crate) fn deliver_pending(&mut self) -> bool {
        if !self.iaq_en && self.iaq_ind > 0 {
            self.iaq_ind -= 1;
            let message = self.iaq[self.iaq_ind];
            self.raise(message);
            true
        } else {
            false
        }
    }

    /// RFI: disable queueing, then restore PC and R0 from the stack in that
    /// order (reversing the push order of [`Dcpu::raise`]).
    pub(crate) fn return_from_interrupt(&mut self) {
        self.iaq_en = false;
        self.pc = self.pop();
        self.r[0] = self.pop();
    }
}
