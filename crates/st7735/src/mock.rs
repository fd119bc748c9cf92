//! Recording interface for driver tests

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;

use crate::interface::DisplayInterface;

/// One thing the driver did, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Command(u8),
    Data(Vec<u8>),
    Reset,
    ReleaseChipSelect,
    Delay(u32),
}

#[derive(Debug)]
pub struct MockError;

#[derive(Debug, Default)]
pub struct MockInterface {
    log: Rc<RefCell<Vec<Op>>>,
    /// Transactions left before every further one fails
    budget: Option<usize>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay that records into the same log
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            log: self.log.clone(),
        }
    }

    pub fn fail_after(&mut self, transactions: usize) {
        self.budget = Some(transactions);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.log.borrow().clone()
    }

    pub fn clear(&mut self) {
        self.log.borrow_mut().clear();
    }

    pub fn command_count(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::Command(_)))
            .count()
    }

    pub fn data_count(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::Data(_)))
            .count()
    }

    /// Each data burst paired with the command it followed
    pub fn command_data(&self) -> Vec<(u8, Vec<u8>)> {
        let mut last_command = None;
        let mut pairs = Vec::new();
        for op in self.log.borrow().iter() {
            match op {
                Op::Command(cmd) => last_command = Some(*cmd),
                Op::Data(data) => {
                    if let Some(cmd) = last_command {
                        pairs.push((cmd, data.clone()));
                    }
                }
                _ => {}
            }
        }
        pairs
    }

    fn transaction(&mut self, op: Op) -> Result<(), MockError> {
        if let Some(budget) = self.budget.as_mut() {
            if *budget == 0 {
                return Err(MockError);
            }
            *budget -= 1;
        }
        self.log.borrow_mut().push(op);
        Ok(())
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.transaction(Op::Command(command))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.transaction(Op::Data(data.to_vec()))
    }

    fn hard_reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Op::Reset);
        Ok(())
    }

    fn release_chip_select(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Op::ReleaseChipSelect);
        Ok(())
    }
}

pub struct MockDelay {
    log: Rc<RefCell<Vec<Op>>>,
}

impl MockDelay {
    /// Delay whose calls are not recorded anywhere visible
    pub fn detached() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Op::Delay(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Op::Delay(us));
    }
}
