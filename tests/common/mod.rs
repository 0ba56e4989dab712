#![allow(dead_code)]

use reqwest::StatusCode;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::io;
use vintage_cars_cli::api::{CarService, Outcome, Probe};
use vintage_cars_cli::error::GatewayError;
use vintage_cars_cli::model::{Car, CarFields};
use vintage_cars_cli::prompt::Console;

/// Console fed from a fixed list of lines; runs dry with an EOF error.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        ScriptedConsole {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn said(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

/// In-memory car service recording every call it receives.
#[derive(Default)]
pub struct FakeService {
    pub cars: RefCell<BTreeMap<i64, CarFields>>,
    pub calls: RefCell<Vec<String>>,
    /// Number of liveness probes that succeed; `None` means always.
    pub alive_for: Cell<Option<usize>>,
    /// Status every probe answers with instead of the real lookup.
    pub probe_status: Cell<Option<StatusCode>>,
    /// Status every mutation answers with, without applying it.
    pub mutation_status: Cell<Option<StatusCode>>,
    pub offline_mutations: Cell<bool>,
    pub list_failure: RefCell<Option<GatewayError>>,
}

impl FakeService {
    pub fn with_cars(cars: &[Car]) -> Self {
        let fake = FakeService::default();
        for car in cars {
            fake.cars
                .borrow_mut()
                .insert(car.id, fields_of(car));
        }
        fake
    }

    pub fn dead() -> Self {
        let fake = FakeService::default();
        fake.alive_for.set(Some(0));
        fake
    }

    pub fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }

    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation(&self) -> Option<Outcome> {
        if self.offline_mutations.get() {
            return Some(Err(GatewayError::Transport("connection refused".into())));
        }
        self.mutation_status.get().map(Ok)
    }
}

impl CarService for FakeService {
    fn probe_server(&self) -> Probe {
        self.log("probe".into());
        match self.alive_for.get() {
            Some(0) => Probe::Unreachable,
            Some(n) => {
                self.alive_for.set(Some(n - 1));
                Probe::Present
            }
            None => Probe::Present,
        }
    }

    fn record_exists(&self, id: i64) -> Probe {
        self.log(format!("exists {}", id));
        if let Some(status) = self.probe_status.get() {
            return Probe::Unexpected(status);
        }
        if self.cars.borrow().contains_key(&id) {
            Probe::Present
        } else {
            Probe::Absent
        }
    }

    fn list_records(&self) -> Result<Vec<Car>, GatewayError> {
        self.log("list".into());
        if let Some(err) = self.list_failure.borrow_mut().take() {
            return Err(err);
        }
        Ok(self
            .cars
            .borrow()
            .iter()
            .map(|(id, fields)| fields.clone().with_id(*id))
            .collect())
    }

    fn create_record(&self, car: &Car) -> Outcome {
        self.log(format!("create {}", serde_json::to_string(car).unwrap()));
        if let Some(outcome) = self.mutation() {
            return outcome;
        }
        self.cars
            .borrow_mut()
            .insert(car.id, fields_of(car));
        Ok(StatusCode::CREATED)
    }

    fn delete_record(&self, id: i64) -> Outcome {
        self.log(format!("delete {}", id));
        if let Some(outcome) = self.mutation() {
            return outcome;
        }
        self.cars.borrow_mut().remove(&id);
        Ok(StatusCode::OK)
    }

    fn update_record(&self, id: i64, fields: &CarFields) -> Outcome {
        self.log(format!("update {} {}", id, serde_json::to_string(fields).unwrap()));
        if let Some(outcome) = self.mutation() {
            return outcome;
        }
        self.cars.borrow_mut().insert(id, fields.clone());
        Ok(StatusCode::OK)
    }
}

pub fn car(id: i64, brand: &str, model: &str, production_year: i32, convertible: bool) -> Car {
    Car {
        id,
        brand: brand.into(),
        model: model.into(),
        production_year,
        convertible,
    }
}

pub fn fields_of(car: &Car) -> CarFields {
    CarFields {
        brand: car.brand.clone(),
        model: car.model.clone(),
        production_year: car.production_year,
        convertible: car.convertible,
    }
}
