//! Reduced drone + ball physics for the demo producer.
//!
//! The drone flies a banked circular patrol with analytic position, velocity
//! and attitude. The ball is ballistic: gravity pulls it down, the floor
//! stops it dead, and every few seconds it is relaunched on a lobbed arc
//! toward wherever the drone currently is.

use crate::state::SimulationSnapshot;
use crate::vector::Vec3;

pub const GRAVITY: f64 = 9.81;

/// Patrol circle radius in meters.
const PATROL_RADIUS: f64 = 5.0;

/// Patrol altitude, with a slow vertical bob on top.
const PATROL_ALTITUDE: f64 = 3.0;
const BOB_AMPLITUDE: f64 = 0.5;

/// Angular rate of the patrol circle, rad/s.
const PATROL_RATE: f64 = 0.8;

/// Seconds between ball launches, and the arc's time of flight.
const KICK_PERIOD: f64 = 4.0;
const KICK_FLIGHT_TIME: f64 = 1.5;

#[derive(Debug, Clone, Copy)]
pub struct DroneState {
    pub pos: Vec3,
    pub ang: Vec3,
    pub vel: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct BallState {
    pub pos: Vec3,
    pub vel: Vec3,
}

#[derive(Debug)]
pub struct Simulation {
    t: f64,
    next_kick: f64,
    drone: DroneState,
    ball: BallState,
}

impl Simulation {
    pub fn new() -> Self {
        Simulation {
            t: 0.0,
            next_kick: KICK_PERIOD,
            drone: drone_at(0.0),
            ball: BallState {
                pos: Vec3::ZERO,
                vel: Vec3::ZERO,
            },
        }
    }

    /// Advance the world by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.t += dt;
        self.drone = drone_at(self.t);
        self.step_ball(dt);

        if self.t >= self.next_kick {
            self.next_kick += KICK_PERIOD;
            self.kick_ball();
        }
    }

    fn step_ball(&mut self, dt: f64) {
        let ball = &mut self.ball;
        ball.vel = Vec3::new(ball.vel.x(), ball.vel.y(), ball.vel.z() - GRAVITY * dt);
        ball.pos = ball.pos.add(ball.vel.scale(dt));

        // Floor is a dead stop, no bounce.
        if ball.pos.z() <= 0.0 {
            ball.pos = Vec3::new(ball.pos.x(), ball.pos.y(), 0.0);
            ball.vel = Vec3::ZERO;
        }
    }

    /// Launch the ball on an arc that meets the drone's current position
    /// after `KICK_FLIGHT_TIME` seconds of unresisted flight.
    fn kick_ball(&mut self) {
        let tf = KICK_FLIGHT_TIME;
        let to_drone = self.drone.pos.sub(self.ball.pos);
        self.ball.vel = Vec3::new(
            to_drone.x() / tf,
            to_drone.y() / tf,
            to_drone.z() / tf + 0.5 * GRAVITY * tf,
        );
    }

    pub fn drone(&self) -> DroneState {
        self.drone
    }

    pub fn ball(&self) -> BallState {
        self.ball
    }

    /// Package the current state for the wire, stamping it with `ts`.
    pub fn snapshot(&self, ts: i64) -> SimulationSnapshot {
        SimulationSnapshot {
            ts,
            drone_pos: self.drone.pos,
            drone_ang: self.drone.ang,
            drone_vel: self.drone.vel,
            ball_pos: self.ball.pos,
            ball_vel: self.ball.vel,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed-form patrol state at time `t`.
fn drone_at(t: f64) -> DroneState {
    let theta = PATROL_RATE * t;
    let bob = BOB_AMPLITUDE * (0.5 * theta).sin();
    let bob_rate = BOB_AMPLITUDE * 0.5 * PATROL_RATE * (0.5 * theta).cos();

    let pos = Vec3::new(
        PATROL_RADIUS * theta.cos(),
        PATROL_RADIUS * theta.sin(),
        PATROL_ALTITUDE + bob,
    );
    let vel = Vec3::new(
        -PATROL_RADIUS * PATROL_RATE * theta.sin(),
        PATROL_RADIUS * PATROL_RATE * theta.cos(),
        bob_rate,
    );

    // Constant-rate turn: bank toward the circle's center, nose on the
    // velocity vector.
    let bank = (PATROL_RATE * PATROL_RATE * PATROL_RADIUS / GRAVITY).atan();
    let yaw = theta + std::f64::consts::FRAC_PI_2;
    let ang = Vec3::new(bank, 0.0, yaw);

    DroneState { pos, ang, vel }
}
