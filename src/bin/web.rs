//! Single binary web server: JSON API for league sessions, CSV exports for score sheets.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, SESSION_TTL_HOURS.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use doubles_league::{
    export_groups, export_matches, export_qualifiers, import_roster, plan_league,
    AdvancementPolicy, Entrant, FinalFormat, LeagueError, LeagueRequest,
    LeagueSession, PartitionMode, Ranking, SessionId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: the input snapshot + last activity time (for auto-cleanup).
struct SessionEntry {
    session: LeagueSession,
    last_activity: Instant,
}

/// In-memory state: many sessions by ID. Entries are removed after the TTL of inactivity.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct DrawSeedBody {
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct AdvancementBody {
    #[serde(default)]
    advancement: Option<AdvancementPolicy>,
}

#[derive(Deserialize)]
struct FinalFormatBody {
    #[serde(default)]
    final_format: Option<FinalFormat>,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Tables available for CSV download.
#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ExportTable {
    Groups,
    Matches,
    Qualifiers,
}

impl ExportTable {
    fn file_name(self) -> &'static str {
        match self {
            ExportTable::Groups => "groups.csv",
            ExportTable::Matches => "matches.csv",
            ExportTable::Qualifiers => "qualifiers.csv",
        }
    }
}

/// Path segments: session id and export table (e.g. /api/sessions/{id}/export/matches.csv)
#[derive(Deserialize)]
struct ExportPath {
    id: SessionId,
    table: ExportTable,
}

fn bad_request(e: LeagueError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Look up a session, refresh its activity time and hand it to `f`.
fn with_session<F>(state: &AppState, id: SessionId, f: F) -> HttpResponse
where
    F: FnOnce(&mut LeagueSession) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.session)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    }
}

/// Apply an edit and return the updated session (400 on a rejected edit).
fn edit_session<F>(state: &AppState, id: SessionId, edit: F) -> HttpResponse
where
    F: FnOnce(&mut LeagueSession) -> Result<(), LeagueError>,
{
    with_session(state, id, |session| match edit(session) {
        Ok(()) => HttpResponse::Ok().json(&*session),
        Err(e) => bad_request(e),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "doubles-league",
    })
}

/// Stateless: plan a league straight from a request body.
#[post("/api/plan")]
async fn api_plan(body: Json<LeagueRequest>) -> HttpResponse {
    match plan_league(&body) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(e) => bad_request(e),
    }
}

/// Create a session, optionally seeded with a request (client stores the id).
#[post("/api/sessions")]
async fn api_create_session(state: AppState, body: Option<Json<LeagueRequest>>) -> HttpResponse {
    let session = match body {
        Some(Json(request)) => match LeagueSession::with_request(request) {
            Ok(session) => session,
            Err(e) => return bad_request(e),
        },
        None => LeagueSession::new(),
    };
    let id = session.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created session {}", id);
    let response = HttpResponse::Ok().json(&session);
    g.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |session| HttpResponse::Ok().json(&*session))
}

/// Replace the roster (clears rankings and manual picks).
#[put("/api/sessions/{id}/roster")]
async fn api_set_roster(state: AppState, path: Path<SessionPath>, body: Json<Vec<Entrant>>) -> HttpResponse {
    let roster = body.into_inner();
    edit_session(&state, path.id, |session| session.set_roster(roster))
}

#[post("/api/sessions/{id}/entrants")]
async fn api_add_entrant(state: AppState, path: Path<SessionPath>, body: Json<Entrant>) -> HttpResponse {
    let entrant = body.into_inner();
    edit_session(&state, path.id, |session| session.add_entrant(entrant))
}

/// Replace the roster from a CSV body (`affiliation,member_1,member_2`).
#[post("/api/sessions/{id}/roster/import")]
async fn api_import_roster(state: AppState, path: Path<SessionPath>, body: String) -> HttpResponse {
    let roster = match import_roster(body.as_bytes()) {
        Ok(roster) => roster,
        Err(e) => return bad_request(e),
    };
    log::info!("Imported {} entrants into session {}", roster.len(), path.id);
    edit_session(&state, path.id, |session| session.set_roster(roster))
}

#[put("/api/sessions/{id}/partition")]
async fn api_set_partition(state: AppState, path: Path<SessionPath>, body: Json<PartitionMode>) -> HttpResponse {
    let partition = body.into_inner();
    edit_session(&state, path.id, |session| {
        session.set_partition(partition);
        Ok(())
    })
}

#[put("/api/sessions/{id}/draw-seed")]
async fn api_set_draw_seed(state: AppState, path: Path<SessionPath>, body: Json<DrawSeedBody>) -> HttpResponse {
    edit_session(&state, path.id, |session| {
        session.set_draw_seed(body.seed);
        Ok(())
    })
}

#[put("/api/sessions/{id}/rankings")]
async fn api_set_rankings(state: AppState, path: Path<SessionPath>, body: Json<Ranking>) -> HttpResponse {
    let rankings = body.into_inner();
    edit_session(&state, path.id, |session| {
        session.set_rankings(rankings);
        Ok(())
    })
}

#[put("/api/sessions/{id}/advancement")]
async fn api_set_advancement(state: AppState, path: Path<SessionPath>, body: Json<AdvancementBody>) -> HttpResponse {
    let advancement = body.into_inner().advancement;
    edit_session(&state, path.id, |session| {
        session.set_advancement(advancement);
        Ok(())
    })
}

#[put("/api/sessions/{id}/final-format")]
async fn api_set_final_format(state: AppState, path: Path<SessionPath>, body: Json<FinalFormatBody>) -> HttpResponse {
    edit_session(&state, path.id, |session| {
        session.set_final_format(body.final_format);
        Ok(())
    })
}

/// Recompute the plan from the session's current snapshot.
#[get("/api/sessions/{id}/plan")]
async fn api_session_plan(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |session| match plan_league(&session.request) {
        Ok(plan) => HttpResponse::Ok().json(plan),
        Err(e) => bad_request(e),
    })
}

/// Download one table of the plan as CSV: groups, matches (score sheet) or qualifiers.
#[get("/api/sessions/{id}/export/{table}.csv")]
async fn api_export(state: AppState, path: Path<ExportPath>) -> HttpResponse {
    let table = path.table;
    with_session(&state, path.id, |session| {
        let mut buf = Vec::new();
        let result = plan_league(&session.request).and_then(|plan| match table {
            ExportTable::Groups => export_groups(&plan, &mut buf),
            ExportTable::Matches => export_matches(&plan, &mut buf),
            ExportTable::Qualifiers => export_qualifiers(&plan, &mut buf),
        });
        match result {
            Ok(()) => HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", table.file_name()),
                ))
                .body(buf),
            Err(e) => bad_request(e),
        }
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_session_ttl_hours() -> u64 {
    12
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let ttl_hours: u64 = std::env::var("SESSION_TTL_HOURS")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(default_session_ttl_hours);
    let session_ttl = Duration::from_secs(ttl_hours * 3600);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: every 30 minutes, remove sessions idle past the TTL
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < session_ttl);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for {}h)", removed, ttl_hours);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_plan)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_set_roster)
            .service(api_add_entrant)
            .service(api_import_roster)
            .service(api_set_partition)
            .service(api_set_draw_seed)
            .service(api_set_rankings)
            .service(api_set_advancement)
            .service(api_set_final_format)
            .service(api_session_plan)
            .service(api_export)
    })
    .bind(bind)?
    .run()
    .await
}
