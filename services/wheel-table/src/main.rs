use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use anyhow::Context;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State as AxumState;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use superwheel_execution::{RandomSpins, TableConfig, TimingConfig, WheelTable};
use superwheel_types::wheel::{
    BetLabel, EngineError, RoundEvent, TableSnapshot, CASCADE_DELAY_MS, SETTLE_DELAY_MS,
    SPIN_DURATION_MS, STARTING_BALANCE,
};
use tokio::sync::{broadcast, mpsc};
use tokio::time;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

type Table = WheelTable<RandomSpins<StdRng>>;

#[derive(Clone, Debug)]
struct WheelTableConfig {
    table: TableConfig,
    tick_ms: u64,
    seed: Option<u64>,
}

impl WheelTableConfig {
    fn from_env() -> Self {
        Self {
            table: TableConfig {
                starting_balance: read_u64("WHEEL_TABLE_STARTING_BALANCE", STARTING_BALANCE),
                timing: TimingConfig::new(
                    read_ms("WHEEL_TABLE_SPIN_MS", SPIN_DURATION_MS),
                    read_ms("WHEEL_TABLE_CASCADE_MS", CASCADE_DELAY_MS),
                    read_ms("WHEEL_TABLE_SETTLE_MS", SETTLE_DELAY_MS),
                ),
            },
            tick_ms: read_ms("WHEEL_TABLE_TICK_MS", 100),
            seed: std::env::var("WHEEL_TABLE_SEED")
                .ok()
                .and_then(|raw| raw.parse::<u64>().ok()),
        }
    }
}

fn read_ms(key: &str, fallback: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(fallback)
}

fn read_u64(key: &str, fallback: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(fallback)
}

/// All player tables hosted by this process. Each player id owns an independent session,
/// kept alive while at least one connection has joined it.
struct TableHost {
    config: TableConfig,
    tables: HashMap<String, Table>,
    connections: HashMap<String, usize>,
    seed_rng: StdRng,
    started: Instant,
}

impl TableHost {
    fn new(config: &WheelTableConfig, started: Instant) -> anyhow::Result<Self> {
        config
            .table
            .timing
            .validate()
            .context("invalid wheel table timing")?;
        let seed_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config: config.table,
            tables: HashMap::new(),
            connections: HashMap::new(),
            seed_rng,
            started,
        })
    }

    fn now_ms(&self, now: Instant) -> u64 {
        u64::try_from(now.saturating_duration_since(self.started).as_millis()).unwrap_or(u64::MAX)
    }

    fn table_mut(&mut self, player_id: &str) -> Result<&mut Table, WheelTableError> {
        self.tables
            .get_mut(player_id)
            .ok_or(WheelTableError::NotJoined)
    }

    fn handle_join(&mut self, player_id: &str) -> Result<TableSnapshot, WheelTableError> {
        if let Some(table) = self.tables.get(player_id) {
            return Ok(table.snapshot());
        }
        let seed = self.seed_rng.gen::<u64>();
        let table = WheelTable::with_seed(self.config, seed)
            .map_err(|err| WheelTableError::Config(err.to_string()))?;
        let snapshot = table.snapshot();
        self.tables.insert(player_id.to_string(), table);
        info!(player_id, balance = snapshot.balance, "player joined");
        Ok(snapshot)
    }

    fn handle_leave(&mut self, player_id: &str) {
        self.connections.remove(player_id);
        if self.tables.remove(player_id).is_some() {
            info!(player_id, "player left");
        }
    }

    /// Count a connection that newly joined `player_id`.
    fn attach(&mut self, player_id: &str) {
        *self.connections.entry(player_id.to_string()).or_default() += 1;
    }

    /// Release a connection's hold on `player_id`; the table is dropped with the last one.
    fn detach(&mut self, player_id: &str) {
        let Some(count) = self.connections.get_mut(player_id) else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count > 0 {
            return;
        }
        self.connections.remove(player_id);
        if self.tables.remove(player_id).is_some() {
            info!(player_id, "player table evicted");
        }
    }

    fn handle_bet(
        &mut self,
        player_id: &str,
        label: &str,
        amount: f64,
    ) -> Result<TableSnapshot, WheelTableError> {
        let label = label
            .parse::<BetLabel>()
            .map_err(|_| WheelTableError::InvalidBet("UNKNOWN_BET_LABEL".to_string()))?;
        let amount = normalize_amount(amount)?;
        let table = self.table_mut(player_id)?;
        table.place_bet(label, amount)?;
        Ok(table.snapshot())
    }

    fn handle_clear(&mut self, player_id: &str) -> Result<TableSnapshot, WheelTableError> {
        let table = self.table_mut(player_id)?;
        let refunded = table.clear_bets()?;
        debug!(player_id, refunded, "bets cleared");
        Ok(table.snapshot())
    }

    fn handle_spin(
        &mut self,
        player_id: &str,
        now: Instant,
    ) -> Result<Vec<OutboundEvent>, WheelTableError> {
        let now_ms = self.now_ms(now);
        let table = self.table_mut(player_id)?;
        let events = table.spin(now_ms)?;
        Ok(vec![
            OutboundEvent::Round {
                player_id: player_id.to_string(),
                events,
            },
            OutboundEvent::State {
                player_id: player_id.to_string(),
                payload: table.snapshot(),
            },
        ])
    }

    fn tick(&mut self, now: Instant) -> Vec<OutboundEvent> {
        let now_ms = self.now_ms(now);
        let mut outbound = Vec::new();
        for (player_id, table) in self.tables.iter_mut() {
            let events = table.tick(now_ms);
            if events.is_empty() {
                continue;
            }
            outbound.push(OutboundEvent::Round {
                player_id: player_id.clone(),
                events,
            });
            outbound.push(OutboundEvent::State {
                player_id: player_id.clone(),
                payload: table.snapshot(),
            });
        }
        outbound
    }
}

fn normalize_amount(amount: f64) -> Result<u64, WheelTableError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(WheelTableError::InvalidBet("INVALID_BET_AMOUNT".to_string()));
    }
    let floored = amount.floor() as u64;
    if floored == 0 {
        return Err(WheelTableError::InvalidBet("INVALID_BET_AMOUNT".to_string()));
    }
    Ok(floored)
}

#[derive(Debug)]
enum WheelTableError {
    NotJoined,
    InvalidBet(String),
    Config(String),
    Engine(EngineError),
}

impl From<EngineError> for WheelTableError {
    fn from(value: EngineError) -> Self {
        WheelTableError::Engine(value)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutboundEvent {
    State {
        player_id: String,
        payload: TableSnapshot,
    },
    Round {
        player_id: String,
        events: Vec<RoundEvent>,
    },
}

impl OutboundEvent {
    fn player_id(&self) -> &str {
        match self {
            OutboundEvent::State { player_id, .. } | OutboundEvent::Round { player_id, .. } => {
                player_id
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum InboundMessage {
    Join {
        request_id: String,
        player_id: String,
    },
    Leave {
        request_id: Option<String>,
        player_id: String,
    },
    Bet {
        request_id: String,
        player_id: String,
        label: String,
        amount: f64,
    },
    Clear {
        request_id: String,
        player_id: String,
    },
    Spin {
        request_id: String,
        player_id: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutboundResponse {
    Ack {
        request_id: String,
    },
    Error {
        request_id: String,
        code: String,
        message: String,
    },
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    AxumState(state): AxumState<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

#[derive(Clone)]
struct AppState {
    host: Arc<Mutex<TableHost>>,
    broadcaster: broadcast::Sender<OutboundEvent>,
}

impl AppState {
    fn host(&self) -> MutexGuard<'_, TableHost> {
        self.host.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Player ids joined through one connection; only their events are forwarded to it.
type Joined = Arc<Mutex<HashSet<String>>>;

fn is_joined(joined: &Joined, player_id: &str) -> bool {
    joined
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(player_id)
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let mut broadcast_rx = state.broadcaster.subscribe();
    let joined: Joined = Arc::default();

    let write_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if sender.send(message).await.is_err() {
                break;
            }
        }
    });

    let broadcast_task = {
        let tx = tx.clone();
        let joined = joined.clone();
        tokio::spawn(async move {
            loop {
                match broadcast_rx.recv().await {
                    Ok(event) => {
                        if !is_joined(&joined, event.player_id()) {
                            continue;
                        }
                        if let Ok(payload) = serde_json::to_string(&event) {
                            let _ = tx.send(Message::Text(payload));
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "connection lagging behind table events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    };

    while let Some(Ok(message)) = receiver.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<InboundMessage>(&text) {
                Ok(inbound) => {
                    let response = handle_inbound(inbound, &state, &joined, Instant::now());
                    if let Some(response) = response {
                        send_response(&tx, response);
                    }
                }
                Err(err) => {
                    warn!(?err, "invalid inbound message");
                }
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    write_task.abort();
    broadcast_task.abort();
    release_connection(&state, &joined);
}

/// Detach every player id a closed connection had joined.
fn release_connection(state: &AppState, joined: &Joined) {
    let player_ids: Vec<String> = joined
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .drain()
        .collect();
    let mut host = state.host();
    for player_id in &player_ids {
        host.detach(player_id);
    }
}

fn publish(state: &AppState, events: Vec<OutboundEvent>) {
    for event in events {
        let _ = state.broadcaster.send(event);
    }
}

fn respond(
    request_id: String,
    result: Result<Vec<OutboundEvent>, WheelTableError>,
    state: &AppState,
) -> OutboundResponse {
    match result {
        Ok(events) => {
            publish(state, events);
            OutboundResponse::Ack { request_id }
        }
        Err(err) => error_response(request_id, err),
    }
}

fn state_event(player_id: &str, payload: TableSnapshot) -> Vec<OutboundEvent> {
    vec![OutboundEvent::State {
        player_id: player_id.to_string(),
        payload,
    }]
}

fn handle_inbound(
    inbound: InboundMessage,
    state: &AppState,
    joined: &Joined,
    now: Instant,
) -> Option<OutboundResponse> {
    match inbound {
        InboundMessage::Join {
            request_id,
            player_id,
        } => {
            let mut host = state.host();
            let result = host.handle_join(&player_id);
            if result.is_ok()
                && joined
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(player_id.clone())
            {
                host.attach(&player_id);
            }
            drop(host);
            let result = result.map(|snapshot| state_event(&player_id, snapshot));
            Some(respond(request_id, result, state))
        }
        InboundMessage::Leave {
            request_id,
            player_id,
        } => {
            state.host().handle_leave(&player_id);
            joined
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&player_id);
            request_id.map(|request_id| OutboundResponse::Ack { request_id })
        }
        InboundMessage::Bet {
            request_id,
            player_id,
            label,
            amount,
        } => {
            let result = state
                .host()
                .handle_bet(&player_id, &label, amount)
                .map(|snapshot| state_event(&player_id, snapshot));
            Some(respond(request_id, result, state))
        }
        InboundMessage::Clear {
            request_id,
            player_id,
        } => {
            let result = state
                .host()
                .handle_clear(&player_id)
                .map(|snapshot| state_event(&player_id, snapshot));
            Some(respond(request_id, result, state))
        }
        InboundMessage::Spin {
            request_id,
            player_id,
        } => {
            let result = state.host().handle_spin(&player_id, now);
            Some(respond(request_id, result, state))
        }
    }
}

fn send_response(tx: &mpsc::UnboundedSender<Message>, response: OutboundResponse) {
    if let Ok(payload) = serde_json::to_string(&response) {
        let _ = tx.send(Message::Text(payload));
    }
}

fn error_response(request_id: String, err: WheelTableError) -> OutboundResponse {
    let (code, message) = match err {
        WheelTableError::NotJoined => ("NOT_JOINED".to_string(), "NOT_JOINED".to_string()),
        WheelTableError::InvalidBet(msg) => ("INVALID_BET".to_string(), msg),
        WheelTableError::Config(msg) => ("INVALID_CONFIG".to_string(), msg),
        WheelTableError::Engine(err) => (err.code().to_string(), err.to_string()),
    };
    OutboundResponse::Error {
        request_id,
        code,
        message,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let host = std::env::var("WHEEL_TABLE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("WHEEL_TABLE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(9124);

    let config = WheelTableConfig::from_env();
    let table_host = Arc::new(Mutex::new(TableHost::new(&config, Instant::now())?));
    let (broadcaster, _) = broadcast::channel::<OutboundEvent>(1024);

    let state = AppState {
        host: table_host,
        broadcaster,
    };

    // Tick loop
    let tick_state = state.clone();
    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_millis(config.tick_ms.max(1)));
        loop {
            interval.tick().await;
            let events = tick_state.host().tick(Instant::now());
            publish(&tick_state, events);
        }
    });

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .route("/healthz", get(healthz))
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("invalid listen addr")?;
    info!(%addr, "wheel table service listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use superwheel_types::wheel::{CascadePhase, Ring};

    fn test_config(seed: u64) -> WheelTableConfig {
        WheelTableConfig {
            table: TableConfig {
                starting_balance: 100,
                timing: TimingConfig::new(1_000, 500, 2_000),
            },
            tick_ms: 100,
            seed: Some(seed),
        }
    }

    fn test_state(seed: u64) -> (AppState, broadcast::Receiver<OutboundEvent>, Instant) {
        let started = Instant::now();
        let host = TableHost::new(&test_config(seed), started).unwrap();
        let (broadcaster, receiver) = broadcast::channel(64);
        let state = AppState {
            host: Arc::new(Mutex::new(host)),
            broadcaster,
        };
        (state, receiver, started)
    }

    fn error_code(response: Option<OutboundResponse>) -> String {
        match response {
            Some(OutboundResponse::Error { code, .. }) => code,
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount(10.0).unwrap(), 10);
        assert_eq!(normalize_amount(25.9).unwrap(), 25);
        for invalid in [0.0, -5.0, 0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                normalize_amount(invalid),
                Err(WheelTableError::InvalidBet(_))
            ));
        }
    }

    #[test]
    fn test_zero_timing_rejected_at_startup() {
        let mut config = test_config(1);
        config.table.timing.settle_ms = 0;
        assert!(TableHost::new(&config, Instant::now()).is_err());
    }

    #[test]
    fn test_inbound_message_parsing() {
        let bet: InboundMessage = serde_json::from_str(
            r#"{"type":"bet","request_id":"r1","player_id":"alice","label":"Logo1","amount":5}"#,
        )
        .unwrap();
        assert!(matches!(
            bet,
            InboundMessage::Bet { ref label, amount, .. } if label == "Logo1" && amount == 5.0
        ));

        let leave: InboundMessage =
            serde_json::from_str(r#"{"type":"leave","player_id":"alice"}"#).unwrap();
        assert!(matches!(
            leave,
            InboundMessage::Leave {
                request_id: None,
                ..
            }
        ));
    }

    #[test]
    fn test_requests_require_join() {
        let (state, _rx, now) = test_state(1);
        let joined = Joined::default();
        let spin = InboundMessage::Spin {
            request_id: "r1".to_string(),
            player_id: "alice".to_string(),
        };
        assert_eq!(error_code(handle_inbound(spin, &state, &joined, now)), "NOT_JOINED");
    }

    #[test]
    fn test_bet_validation_codes() {
        let (state, _rx, now) = test_state(1);
        let joined = Joined::default();
        let join = InboundMessage::Join {
            request_id: "r0".to_string(),
            player_id: "alice".to_string(),
        };
        assert!(matches!(
            handle_inbound(join, &state, &joined, now),
            Some(OutboundResponse::Ack { .. })
        ));
        assert!(is_joined(&joined, "alice"));

        let bet = |label: &str, amount: f64| InboundMessage::Bet {
            request_id: "r1".to_string(),
            player_id: "alice".to_string(),
            label: label.to_string(),
            amount,
        };
        assert_eq!(
            error_code(handle_inbound(bet("3", 5.0), &state, &joined, now)),
            "INVALID_BET"
        );
        assert_eq!(
            error_code(handle_inbound(bet("1", -1.0), &state, &joined, now)),
            "INVALID_BET"
        );
        assert_eq!(
            error_code(handle_inbound(bet("1", 150.0), &state, &joined, now)),
            "INSUFFICIENT_FUNDS"
        );

        let spin = InboundMessage::Spin {
            request_id: "r2".to_string(),
            player_id: "alice".to_string(),
        };
        assert_eq!(error_code(handle_inbound(spin, &state, &joined, now)), "NO_STAKE");
    }

    #[test]
    fn test_round_plays_out_through_ticks() {
        let (state, mut rx, started) = test_state(7);
        let joined = Joined::default();
        let requests = [
            InboundMessage::Join {
                request_id: "r0".to_string(),
                player_id: "alice".to_string(),
            },
            InboundMessage::Bet {
                request_id: "r1".to_string(),
                player_id: "alice".to_string(),
                label: "BONUS".to_string(),
                amount: 10.0,
            },
            InboundMessage::Spin {
                request_id: "r2".to_string(),
                player_id: "alice".to_string(),
            },
        ];
        for request in requests {
            assert!(matches!(
                handle_inbound(request, &state, &joined, started),
                Some(OutboundResponse::Ack { .. })
            ));
        }
        {
            let mut host = state.host();
            let table = host.table_mut("alice").unwrap();
            assert_eq!(table.phase(), CascadePhase::Spinning(Ring::Outer));
        }

        let spin_again = InboundMessage::Spin {
            request_id: "r3".to_string(),
            player_id: "alice".to_string(),
        };
        assert_eq!(
            error_code(handle_inbound(spin_again, &state, &joined, started)),
            "ALREADY_SPINNING"
        );

        // Longest round: 3 spins, 2 cascades, settle.
        let events = state.host().tick(started + Duration::from_millis(6_000));
        assert!(!events.is_empty());
        assert!(events.iter().all(|event| event.player_id() == "alice"));
        publish(&state, events);

        let mut finished = false;
        let mut last_balance = None;
        while let Ok(event) = rx.try_recv() {
            match event {
                OutboundEvent::Round { events, .. } => {
                    finished |= events
                        .iter()
                        .any(|event| matches!(event, RoundEvent::RoundFinished { .. }));
                }
                OutboundEvent::State { payload, .. } => last_balance = Some(payload.balance),
            }
        }
        assert!(finished);
        let host = state.host();
        let table = host.tables.get("alice").unwrap();
        assert_eq!(table.phase(), CascadePhase::Idle);
        assert_eq!(last_balance, Some(table.snapshot().balance));
    }

    #[test]
    fn test_tables_are_independent() {
        let (state, _rx, now) = test_state(3);
        let mut host = state.host();
        host.handle_join("alice").unwrap();
        host.handle_join("bob").unwrap();
        host.handle_bet("alice", "5", 40.0).unwrap();
        assert_eq!(host.handle_join("bob").unwrap().balance, 100);
        assert_eq!(host.handle_join("alice").unwrap().balance, 60);

        host.handle_spin("alice", now).unwrap();
        assert!(host.tables["alice"].snapshot().is_spinning());
        assert!(!host.tables["bob"].snapshot().is_spinning());

        host.handle_leave("alice");
        assert!(matches!(
            host.handle_clear("alice"),
            Err(WheelTableError::NotJoined)
        ));
    }

    #[test]
    fn test_table_evicted_with_last_connection() {
        let (state, _rx, now) = test_state(5);
        let join = |player_id: &str| InboundMessage::Join {
            request_id: "r0".to_string(),
            player_id: player_id.to_string(),
        };
        let first = Joined::default();
        let second = Joined::default();
        handle_inbound(join("alice"), &state, &first, now);
        handle_inbound(join("alice"), &state, &first, now);
        handle_inbound(join("alice"), &state, &second, now);
        assert_eq!(state.host().connections["alice"], 2);

        release_connection(&state, &first);
        assert!(!is_joined(&first, "alice"));
        assert!(state.host().tables.contains_key("alice"));

        release_connection(&state, &second);
        let host = state.host();
        assert!(host.tables.is_empty());
        assert!(host.connections.is_empty());
    }

    #[test]
    fn test_many_joins_released_on_close() {
        let (state, _rx, now) = test_state(6);
        let joined = Joined::default();
        for n in 0..500 {
            let join = InboundMessage::Join {
                request_id: format!("r{n}"),
                player_id: format!("player-{n}"),
            };
            assert!(matches!(
                handle_inbound(join, &state, &joined, now),
                Some(OutboundResponse::Ack { .. })
            ));
        }
        assert_eq!(state.host().tables.len(), 500);

        release_connection(&state, &joined);
        assert!(state.host().tables.is_empty());
        assert!(state.host().connections.is_empty());
    }

    #[test]
    fn test_outbound_serialization() {
        let response = error_response(
            "r9".to_string(),
            WheelTableError::Engine(EngineError::BettingClosed),
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["request_id"], "r9");
        assert_eq!(json["code"], "BETTING_CLOSED");

        let event = OutboundEvent::Round {
            player_id: "alice".to_string(),
            events: vec![RoundEvent::CascadeTo { ring: Ring::Middle }],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "round");
        assert_eq!(json["events"][0]["event"], "cascade_to");
    }
}
