//! Steady-state metrics for single-queue Markovian models (M/M/1, M/M/2,
//! M/M/1/K) and a trace replay of a single-server queue.

use crate::StatsError;

/// Steady-state metrics shared by the infinite-capacity models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueMetrics {
    /// L: mean number of customers in the system
    pub mean_in_system: f64,
    /// Lq: mean number of customers waiting
    pub mean_in_queue: f64,
    /// W: mean time in the system
    pub mean_time_in_system: f64,
    /// Wq: mean time waiting
    pub mean_time_in_queue: f64,
    /// P0: probability the system is empty
    pub empty_probability: f64,
    /// rho: server utilization
    pub utilization: f64,
}

/// Metrics for the finite-capacity model, which additionally loses
/// customers when full.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteQueueMetrics {
    pub metrics: QueueMetrics,
    /// PK: probability the system is full (arrivals lost)
    pub full_probability: f64,
    /// Arrival rate actually admitted
    pub effective_arrival_rate: f64,
}

fn check_rates(arrival: f64, service: f64) -> Result<(), StatsError> {
    if !(arrival > 0.0) {
        return Err(StatsError::RateNotPositive { param: "arrival" });
    }
    if !(service > 0.0) {
        return Err(StatsError::RateNotPositive { param: "service" });
    }
    Ok(())
}

/// M/M/1: one server, infinite capacity. Stable only for rho < 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MM1 {
    arrival: f64,
    service: f64,
}

impl MM1 {
    pub fn new(arrival: f64, service: f64) -> Result<Self, StatsError> {
        check_rates(arrival, service)?;
        let rho = arrival / service;
        if rho >= 1.0 {
            return Err(StatsError::UnstableQueue {
                utilization: rho,
                limit: 1.0,
            });
        }
        Ok(MM1 { arrival, service })
    }

    pub fn metrics(&self) -> QueueMetrics {
        let rho = self.arrival / self.service;
        QueueMetrics {
            mean_in_system: rho / (1.0 - rho),
            mean_in_queue: rho * rho / (1.0 - rho),
            mean_time_in_system: 1.0 / (self.service - self.arrival),
            mean_time_in_queue: rho / (self.service - self.arrival),
            empty_probability: 1.0 - rho,
            utilization: rho,
        }
    }
}

/// M/M/2: two servers, infinite capacity. Stable for offered load < 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MM2 {
    arrival: f64,
    service: f64,
}

impl MM2 {
    pub fn new(arrival: f64, service: f64) -> Result<Self, StatsError> {
        check_rates(arrival, service)?;
        let load = arrival / service;
        if load >= 2.0 {
            return Err(StatsError::UnstableQueue {
                utilization: load,
                limit: 2.0,
            });
        }
        Ok(MM2 { arrival, service })
    }

    pub fn metrics(&self) -> QueueMetrics {
        // a: offered load (lambda/mu); per-server utilization is a/2
        let a = self.arrival / self.service;
        let empty = (2.0 - a) / (2.0 + a);
        let mean_in_queue = a * a * a / ((2.0 - a) * (2.0 + a));
        let mean_in_system = mean_in_queue + a;
        let mean_time_in_queue = mean_in_queue / self.arrival;
        QueueMetrics {
            mean_in_system,
            mean_in_queue,
            mean_time_in_system: mean_time_in_queue + 1.0 / self.service,
            mean_time_in_queue,
            empty_probability: empty,
            utilization: a / 2.0,
        }
    }
}

/// M/M/1/K: one server, room for at most `capacity` customers. Stable at
/// any load because excess arrivals are lost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MM1K {
    arrival: f64,
    service: f64,
    capacity: u32,
}

impl MM1K {
    pub fn new(arrival: f64, service: f64, capacity: u32) -> Result<Self, StatsError> {
        check_rates(arrival, service)?;
        if capacity == 0 {
            return Err(StatsError::ZeroCapacity);
        }
        Ok(MM1K {
            arrival,
            service,
            capacity,
        })
    }

    pub fn metrics(&self) -> FiniteQueueMetrics {
        let rho = self.arrival / self.service;
        let k = self.capacity as f64;
        let ki = self.capacity as i32;

        let (empty, mean_in_system) = if (rho - 1.0).abs() < 1e-12 {
            (1.0 / (k + 1.0), k / 2.0)
        } else {
            let rho_k1 = rho.powi(ki + 1);
            let empty = (1.0 - rho) / (1.0 - rho_k1);
            let mean = rho * (1.0 - (k + 1.0) * rho.powi(ki) + k * rho_k1)
                / ((1.0 - rho) * (1.0 - rho_k1));
            (empty, mean)
        };

        let full = empty * rho.powi(ki);
        let effective = self.arrival * (1.0 - full);
        let mean_in_queue = mean_in_system - (1.0 - empty);

        FiniteQueueMetrics {
            metrics: QueueMetrics {
                mean_in_system,
                mean_in_queue,
                mean_time_in_system: mean_in_system / effective,
                mean_time_in_queue: mean_in_queue / effective,
                empty_probability: empty,
                utilization: rho,
            },
            full_probability: full,
            effective_arrival_rate: effective,
        }
    }
}

/// Summary of a replayed single-server trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSummary {
    /// Wq: mean time spent waiting
    pub mean_time_in_queue: f64,
    /// W: mean time from arrival to service completion
    pub mean_time_in_system: f64,
    /// Lq: mean queue length over the simulated horizon
    pub mean_queue_length: f64,
    /// L: mean number in the system over the simulated horizon
    pub mean_in_system: f64,
    /// Fraction of the horizon the server was busy
    pub utilization: f64,
}

/// Replay explicit arrival and service times through one FIFO server.
///
/// Customer i starts service at the later of its arrival and the previous
/// departure; the horizon runs to the last departure. Arrival times must be
/// nondecreasing for the replay to be meaningful; service times pair up
/// positionally.
pub fn replay_single_server(
    arrivals: &[f64],
    services: &[f64],
) -> Result<TraceSummary, StatsError> {
    if arrivals.len() != services.len() {
        return Err(StatsError::TraceLengthMismatch {
            arrivals: arrivals.len(),
            services: services.len(),
        });
    }
    if arrivals.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let mut clock = 0.0f64;
    let mut busy = 0.0f64;
    let mut queue_time = 0.0f64;
    let mut system_time = 0.0f64;

    for (&arrival, &service) in arrivals.iter().zip(services) {
        let start = arrival.max(clock);
        let finish = start + service;
        queue_time += start - arrival;
        system_time += finish - arrival;
        clock = finish;
        busy += service;
    }

    let n = arrivals.len() as f64;
    let horizon = clock;
    let mean_time_in_queue = queue_time / n;
    let mean_time_in_system = system_time / n;

    Ok(TraceSummary {
        mean_time_in_queue,
        mean_time_in_system,
        mean_queue_length: queue_time / horizon,
        mean_in_system: system_time / horizon,
        utilization: busy / horizon,
    })
}
