//! Client-side call negotiation, expressed as a state machine that is
//! independent of both the signaling transport and the WebRTC engine.
//!
//! The driver (a browser binding, or a test) feeds [`CallEvent`]s in and
//! executes the returned [`CallAction`]s: `Signal` actions go to the relay,
//! everything else goes to the local peer-connection engine. Media itself
//! never passes through here; once the engine reports `MediaEstablished`
//! the relay is out of the picture.

use crate::model::{ClientMessage, RoomId};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallRole {
    /// The side that creates the offer once local media is captured.
    Caller,
    /// The side that waits for an offer and answers it.
    Callee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Idle,
    AwaitingLocalMedia,
    Ready,
    Offering,
    Answering,
    Connected,
    Closed,
}

/// Inputs to the session: traffic forwarded by the relay plus notifications
/// from the local WebRTC engine.
#[derive(Debug, Clone)]
pub enum CallEvent {
    /// Camera/microphone capture succeeded.
    MediaReady,
    /// Capture denied or unavailable. Surfaced to the user, never retried.
    MediaDenied(String),
    /// The engine produced an offer and set it as the local description.
    LocalOffer(Value),
    /// The engine produced an answer and set it as the local description.
    LocalAnswer(Value),
    /// The engine discovered a local ICE candidate.
    LocalCandidate(Value),
    /// An offer arrived through the relay.
    RemoteOffer(Value),
    /// An answer arrived through the relay.
    RemoteAnswer(Value),
    /// A candidate arrived through the relay.
    RemoteCandidate(Value),
    /// The engine finished applying the remote description.
    RemoteDescriptionApplied,
    /// The peer-to-peer media path is up.
    MediaEstablished,
    /// The signaling connection dropped. Ends the attempt; the user rejoins
    /// manually.
    SignalingLost,
}

/// Instructions for whoever drives the actual WebRTC engine.
#[derive(Debug, Clone, PartialEq)]
pub enum CallAction {
    RequestLocalMedia,
    CreateOffer,
    CreateAnswer,
    ApplyRemoteDescription(Value),
    ApplyRemoteCandidate(Value),
    Signal(ClientMessage),
    EndCall { reason: String },
}

/// One participant's negotiation state for a single room.
///
/// Candidates may arrive before the remote description is set; they are
/// buffered here and flushed in arrival order on `RemoteDescriptionApplied`,
/// so early candidates on fast networks are never dropped.
pub struct CallSession {
    room: RoomId,
    role: CallRole,
    state: CallState,
    remote_description_set: bool,
    pending_candidates: Vec<Value>,
}

impl CallSession {
    pub fn new(room: RoomId, role: CallRole) -> Self {
        Self {
            room,
            role,
            state: CallState::Idle,
            remote_description_set: false,
            pending_candidates: Vec::new(),
        }
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn role(&self) -> CallRole {
        self.role
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    /// Kick off the call: capture must succeed before any signaling happens.
    pub fn start(&mut self) -> Vec<CallAction> {
        if self.state != CallState::Idle {
            warn!("start() in state {:?}, ignoring", self.state);
            return Vec::new();
        }
        self.state = CallState::AwaitingLocalMedia;
        vec![CallAction::RequestLocalMedia]
    }

    /// Hang up locally. Terminal; a new session is required to call again.
    pub fn close(&mut self) {
        self.state = CallState::Closed;
    }

    pub fn handle(&mut self, event: CallEvent) -> Vec<CallAction> {
        if self.state == CallState::Closed {
            warn!("event {:?} after close, ignoring", event);
            return Vec::new();
        }

        match event {
            CallEvent::MediaReady => self.on_media_ready(),
            CallEvent::MediaDenied(reason) => {
                self.state = CallState::Closed;
                vec![CallAction::EndCall { reason }]
            }
            CallEvent::LocalOffer(sdp) => self.on_local_offer(sdp),
            CallEvent::LocalAnswer(sdp) => self.on_local_answer(sdp),
            CallEvent::LocalCandidate(candidate) => self.on_local_candidate(candidate),
            CallEvent::RemoteOffer(sdp) => self.on_remote_offer(sdp),
            CallEvent::RemoteAnswer(sdp) => self.on_remote_answer(sdp),
            CallEvent::RemoteCandidate(candidate) => self.on_remote_candidate(candidate),
            CallEvent::RemoteDescriptionApplied => self.on_remote_description_applied(),
            CallEvent::MediaEstablished => self.on_media_established(),
            CallEvent::SignalingLost => {
                self.state = CallState::Closed;
                vec![CallAction::EndCall {
                    reason: "signaling connection lost".to_string(),
                }]
            }
        }
    }

    fn on_media_ready(&mut self) -> Vec<CallAction> {
        if self.state != CallState::AwaitingLocalMedia {
            warn!("MediaReady in state {:?}, ignoring", self.state);
            return Vec::new();
        }
        self.state = CallState::Ready;
        match self.role {
            CallRole::Caller => vec![CallAction::CreateOffer],
            CallRole::Callee => Vec::new(),
        }
    }

    fn on_local_offer(&mut self, sdp: Value) -> Vec<CallAction> {
        if self.role != CallRole::Caller || self.state != CallState::Ready {
            warn!(
                "LocalOffer as {:?} in state {:?}, ignoring",
                self.role, self.state
            );
            return Vec::new();
        }
        self.state = CallState::Offering;
        vec![CallAction::Signal(ClientMessage::Offer {
            room_id: self.room.clone(),
            offer: sdp,
        })]
    }

    fn on_local_answer(&mut self, sdp: Value) -> Vec<CallAction> {
        if self.state != CallState::Answering {
            warn!("LocalAnswer in state {:?}, ignoring", self.state);
            return Vec::new();
        }
        vec![CallAction::Signal(ClientMessage::Answer {
            room_id: self.room.clone(),
            answer: sdp,
        })]
    }

    fn on_local_candidate(&mut self, candidate: Value) -> Vec<CallAction> {
        // Streamed to the peer as soon as the engine produces it, never
        // batched.
        match self.state {
            CallState::Ready | CallState::Offering | CallState::Answering | CallState::Connected => {
                vec![CallAction::Signal(ClientMessage::IceCandidate {
                    room_id: self.room.clone(),
                    candidate,
                })]
            }
            _ => {
                warn!("LocalCandidate in state {:?}, dropping", self.state);
                Vec::new()
            }
        }
    }

    fn on_remote_offer(&mut self, sdp: Value) -> Vec<CallAction> {
        if self.role != CallRole::Callee {
            warn!("RemoteOffer as {:?}, ignoring", self.role);
            return Vec::new();
        }
        // A repeated offer is accepted: the relay does not deduplicate, and
        // the last description wins at the engine layer.
        match self.state {
            CallState::Ready | CallState::Answering => {
                self.state = CallState::Answering;
                self.remote_description_set = false;
                vec![
                    CallAction::ApplyRemoteDescription(sdp),
                    CallAction::CreateAnswer,
                ]
            }
            _ => {
                warn!("RemoteOffer in state {:?}, ignoring", self.state);
                Vec::new()
            }
        }
    }

    fn on_remote_answer(&mut self, sdp: Value) -> Vec<CallAction> {
        if self.role != CallRole::Caller || self.state != CallState::Offering {
            warn!(
                "RemoteAnswer as {:?} in state {:?}, ignoring",
                self.role, self.state
            );
            return Vec::new();
        }
        vec![CallAction::ApplyRemoteDescription(sdp)]
    }

    fn on_remote_candidate(&mut self, candidate: Value) -> Vec<CallAction> {
        if self.remote_description_set {
            vec![CallAction::ApplyRemoteCandidate(candidate)]
        } else {
            self.pending_candidates.push(candidate);
            Vec::new()
        }
    }

    fn on_remote_description_applied(&mut self) -> Vec<CallAction> {
        self.remote_description_set = true;
        self.pending_candidates
            .drain(..)
            .map(CallAction::ApplyRemoteCandidate)
            .collect()
    }

    fn on_media_established(&mut self) -> Vec<CallAction> {
        match self.state {
            CallState::Offering | CallState::Answering => {
                self.state = CallState::Connected;
                Vec::new()
            }
            _ => {
                warn!("MediaEstablished in state {:?}, ignoring", self.state);
                Vec::new()
            }
        }
    }
}
