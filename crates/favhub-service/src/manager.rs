//! The bookmark service: every operation that reads or changes the tree.
//!
//! A successful mutation is saved, announced as a tree event, followed
//! by a render request and (for moves, adds and deletes) a status
//! notice. A failed save keeps the in-memory change, publishes
//! `PersistFailed` and returns the storage error. Rejected requests
//! leave the tree untouched and publish `Rejected`.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};

use favhub_core::config::view::ViewConfig;
use favhub_core::config::AppConfig;
use favhub_core::error::AppError;
use favhub_core::events::{DomainEvent, TreeEvent, ViewEvent};
use favhub_core::result::AppResult;
use favhub_core::traits::{EventSink, StateStore};
use favhub_core::types::NodeId;
use favhub_entity::node::{Link, Node, NodeDraft};
use favhub_entity::search::SearchRecord;
use favhub_entity::view::DisplayItem;
use favhub_storage::exchange::{export_file_name, export_json, parse_import};
use favhub_storage::gateway::LoadSource;
use favhub_storage::providers::build_provider;
use favhub_storage::PersistenceGateway;

use crate::context::{Crumb, ViewSession};
use crate::drag::{DropAction, DropTarget};
use crate::moves::{self, Destination, MoveReport, ReorderReport};
use crate::notice::NoticeBoard;
use crate::search::search;
use crate::tree::{display_order, NodeLocation, TreeStore};

/// A serialized tree ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name, `<prefix>-YYYY-MM-DD.json`.
    pub file_name: String,
    /// Indented JSON body.
    pub body: String,
}

/// What a drop ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The drop was a no-op.
    Nothing,
    /// Items were moved to another folder.
    Moved(MoveReport),
    /// One item changed position in the current folder.
    Reordered(ReorderReport),
}

/// Owns the tree and commits every change to it.
#[derive(Debug)]
pub struct BookmarkService {
    /// The live tree.
    store: TreeStore,
    /// Durable storage of the tree.
    gateway: PersistenceGateway,
    /// Presentation-layer event receiver.
    sink: Box<dyn EventSink>,
    /// Visible status notices.
    notices: NoticeBoard,
    /// View settings.
    view: ViewConfig,
    /// File name prefix for exports.
    export_prefix: String,
    /// Where the tree was loaded from.
    load_source: LoadSource,
}

impl BookmarkService {
    /// Load the tree from `state` and start a service over it.
    pub fn open(config: &AppConfig, state: Box<dyn StateStore>, sink: Box<dyn EventSink>) -> Self {
        let provider = state.provider_type().to_string();
        let gateway = PersistenceGateway::new(state, config.storage.state_key.clone());
        let (roots, load_source) = gateway.load();
        let store = TreeStore::new(roots, config.view.unresolved_path);

        info!(
            provider = %provider,
            source = ?load_source,
            nodes = store.node_count(),
            "Bookmark service ready"
        );

        Self {
            store,
            gateway,
            sink,
            notices: NoticeBoard::new(config.notice.ttl_ms),
            view: config.view.clone(),
            export_prefix: config.storage.export_prefix.clone(),
            load_source,
        }
    }

    /// Build the configured state store and open the service over it.
    pub fn from_config(config: &AppConfig, sink: Box<dyn EventSink>) -> AppResult<Self> {
        let state = build_provider(&config.storage)?;
        Ok(Self::open(config, state, sink))
    }

    /// The tree store.
    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// The root sequence.
    pub fn roots(&self) -> &[Node] {
        self.store.roots()
    }

    /// Where the tree was loaded from at startup.
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    /// Status notices posted so far.
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    // ── Views ────────────────────────────────────────────────────────

    /// Children of the viewed folder in display order.
    pub fn current_items(&self, session: &ViewSession) -> AppResult<Vec<DisplayItem<'_>>> {
        Ok(display_order(self.store.children(session.current_path())?))
    }

    /// Search matches for the session keyword; empty when not searching.
    pub fn search_results(&self, session: &ViewSession) -> Vec<SearchRecord> {
        match session.search_keyword() {
            Some(keyword) => search(self.store.roots(), keyword, &self.view.path_delimiter),
            None => Vec::new(),
        }
    }

    /// The search match at `index` of the rendered results.
    pub fn search_record(&self, session: &ViewSession, index: usize) -> AppResult<SearchRecord> {
        self.search_results(session)
            .into_iter()
            .nth(index)
            .ok_or_else(|| AppError::not_found(format!("No search result at position {index}")))
    }

    /// Number of items in the rendered list.
    pub fn rendered_len(&self, session: &ViewSession) -> AppResult<usize> {
        if session.is_searching() {
            Ok(self.search_results(session).len())
        } else {
            Ok(self.store.children(session.current_path())?.len())
        }
    }

    /// Select every item of the viewed folder.
    pub fn select_all(&mut self, session: &mut ViewSession) -> AppResult<()> {
        if session.is_searching() {
            return self.rejecting(Err(AppError::validation(
                "Select all is unavailable while searching",
            )));
        }
        let len = self.rendered_len(session)?;
        session.selection_mut().select_all(len);
        Ok(())
    }

    /// Breadcrumbs of the viewed folder.
    pub fn breadcrumbs(&self, session: &ViewSession) -> Vec<Crumb> {
        session.breadcrumbs()
    }

    /// Open the folder found at search result `index`.
    pub fn open_search_result(&mut self, session: &mut ViewSession, index: usize) -> AppResult<()> {
        let record = self.search_record(session, index)?;
        let result = session.open_search_result(&record);
        self.rejecting(result)
    }

    // ── Items ────────────────────────────────────────────────────────

    /// Add a node at the end of the viewed folder.
    pub fn add_node(&mut self, session: &mut ViewSession, draft: NodeDraft) -> AppResult<NodeId> {
        let node = self.rejecting(draft.into_node())?;
        let items = self.store.current_children(session.current_path())?;
        if node.is_folder() && items.iter().any(|n| n.is_folder_named(node.name())) {
            let name = node.name().to_string();
            return self.rejecting(Err(AppError::conflict(format!(
                "A folder named '{name}' already exists here"
            ))));
        }

        let id = node.id();
        let name = node.name().to_string();
        let kind = node.kind();
        items.push(node);
        session.clear_transient();

        info!(name = %name, kind = %kind, path = ?session.current_path(), "Added node");
        self.commit(
            TreeEvent::Added {
                name: name.clone(),
                path: session.current_path().to_vec(),
            },
            Some(format!("Added \"{name}\"")),
            0,
        )?;
        Ok(id)
    }

    /// Replace the editable fields of node `id`.
    ///
    /// Click counts and children are kept. Renaming a folder on the
    /// viewed path keeps the view on it.
    pub fn update_node(
        &mut self,
        session: &mut ViewSession,
        id: NodeId,
        draft: NodeDraft,
    ) -> AppResult<()> {
        let draft = self.rejecting(draft.validated())?;
        let location = self
            .store
            .locate(id)
            .ok_or_else(|| AppError::not_found("Node not found"))?;
        let new_name = draft.name().to_string();

        let (old_name, renaming_folder, conflict) = {
            let (items, index) = self
                .store
                .container_of(id)
                .ok_or_else(|| AppError::not_found("Node not found"))?;
            let node = &items[index];
            let renaming = node.is_folder() && node.name() != new_name;
            let conflict = renaming
                && items
                    .iter()
                    .enumerate()
                    .any(|(i, n)| i != index && n.is_folder_named(&new_name));
            (node.name().to_string(), renaming, conflict)
        };
        if conflict {
            return self.rejecting(Err(AppError::conflict(format!(
                "A folder named '{new_name}' already exists here"
            ))));
        }

        let retarget = renaming_folder && self.holds_view(session, &location);

        let node = self
            .store
            .node_mut(id)
            .ok_or_else(|| AppError::not_found("Node not found"))?;
        let applied = draft.apply_to(node);
        self.rejecting(applied)?;

        if retarget {
            let mut path = session.current_path().to_vec();
            path[location.path.len()] = new_name.clone();
            session.retarget(path);
        } else {
            session.clear_transient();
        }

        info!(id = %id, from = %old_name, to = %new_name, "Updated node");
        self.commit(
            TreeEvent::Updated {
                name: new_name.clone(),
            },
            Some(format!("Updated \"{new_name}\"")),
            0,
        )
    }

    /// Replace the editable fields of the item at original `index` of the viewed folder.
    pub fn update_at(
        &mut self,
        session: &mut ViewSession,
        index: usize,
        draft: NodeDraft,
    ) -> AppResult<()> {
        let id = self.id_at(session, index)?;
        self.update_node(session, id, draft)
    }

    /// Delete the item at original `index` of the viewed folder.
    pub fn delete_node(&mut self, session: &mut ViewSession, index: usize) -> AppResult<String> {
        let items = self.store.current_children(session.current_path())?;
        if index >= items.len() {
            return Err(AppError::not_found(format!("No item at position {index}")));
        }
        let name = items.remove(index).name().to_string();
        session.clear_transient();

        info!(name = %name, path = ?session.current_path(), "Deleted node");
        self.commit(
            TreeEvent::Deleted {
                names: vec![name.clone()],
            },
            Some(format!("Deleted \"{name}\"")),
            0,
        )?;
        Ok(name)
    }

    /// Delete node `id` wherever it is, e.g. from a search result.
    pub fn delete_by_id(&mut self, session: &mut ViewSession, id: NodeId) -> AppResult<String> {
        let node = self
            .remove_by_id(session, id)
            .ok_or_else(|| AppError::not_found("Node not found"))?;
        let name = node.name().to_string();
        session.clear_transient();

        info!(id = %id, name = %name, "Deleted node");
        self.commit(
            TreeEvent::Deleted {
                names: vec![name.clone()],
            },
            Some(format!("Deleted \"{name}\"")),
            0,
        )?;
        Ok(name)
    }

    /// Delete every selected item.
    ///
    /// In browsing mode the selection holds original indices and is
    /// removed highest first. While searching it holds result positions,
    /// whose nodes are removed by id.
    pub fn delete_selected(&mut self, session: &mut ViewSession) -> AppResult<Vec<String>> {
        if session.selection().is_empty() {
            return self.rejecting(Err(AppError::validation("Nothing selected")));
        }

        let names = if session.is_searching() {
            let results = self.search_results(session);
            let ids: Vec<NodeId> = session
                .selection()
                .indices()
                .iter()
                .filter_map(|&i| results.get(i))
                .map(|record| record.id)
                .collect();
            ids.into_iter()
                .filter_map(|id| self.remove_by_id(session, id))
                .map(|node| node.name().to_string())
                .collect::<Vec<_>>()
        } else {
            let descending = session.selection().descending();
            let items = self.store.current_children(session.current_path())?;
            if let Some(&stale) = descending.iter().find(|&&i| i >= items.len()) {
                return Err(AppError::not_found(format!("No item at position {stale}")));
            }
            let mut names: Vec<String> = descending
                .into_iter()
                .map(|i| items.remove(i).name().to_string())
                .collect();
            names.reverse();
            names
        };
        session.clear_transient();

        info!(count = names.len(), "Deleted selected nodes");
        let notice = match names.as_slice() {
            [name] => format!("Deleted \"{name}\""),
            names => format!("Deleted {} items", names.len()),
        };
        self.commit(
            TreeEvent::Deleted {
                names: names.clone(),
            },
            Some(notice),
            0,
        )?;
        Ok(names)
    }

    /// Count a visit to the link at original `index` of the viewed folder.
    ///
    /// Returns the updated link. The render request is deferred by the
    /// configured click delay.
    pub fn record_click(&mut self, session: &ViewSession, index: usize) -> AppResult<Link> {
        let id = self.id_at(session, index)?;
        self.record_click_by_id(id)
    }

    /// Count a visit to link `id`.
    pub fn record_click_by_id(&mut self, id: NodeId) -> AppResult<Link> {
        let node = self
            .store
            .node_mut(id)
            .ok_or_else(|| AppError::not_found("Node not found"))?;
        let Some(link) = node.as_link_mut() else {
            let message = format!("'{}' is a folder; only links are counted", node.name());
            return self.rejecting(Err(AppError::validation(message)));
        };
        link.click_count += 1;
        let link = link.clone();

        info!(name = %link.name, clicks = link.click_count, "Recorded click");
        self.commit(
            TreeEvent::Clicked {
                name: link.name.clone(),
                click_count: link.click_count,
            },
            None,
            self.view.click_render_delay_ms,
        )?;
        Ok(link)
    }

    // ── Moves ────────────────────────────────────────────────────────

    /// Move the item at `from` into the sibling folder at `to`.
    pub fn move_to_folder(
        &mut self,
        session: &mut ViewSession,
        from: usize,
        to: usize,
    ) -> AppResult<MoveReport> {
        self.ensure_browsing(session)?;
        let result = moves::move_to_folder(&mut self.store, session.current_path(), from, to);
        let report = self.rejecting(result)?;
        session.clear_transient();
        self.commit_move(&report)?;
        Ok(report)
    }

    /// Move the item at `from` into the parent folder; `None` at the root.
    pub fn move_to_parent(
        &mut self,
        session: &mut ViewSession,
        from: usize,
    ) -> AppResult<Option<MoveReport>> {
        self.ensure_browsing(session)?;
        let result = moves::move_to_parent(&mut self.store, session.current_path(), from);
        let Some(report) = self.rejecting(result)? else {
            return Ok(None);
        };
        session.clear_transient();
        self.commit_move(&report)?;
        Ok(Some(report))
    }

    /// Move the item at `from` into the folder at breadcrumb `target`.
    pub fn move_to_path_index(
        &mut self,
        session: &mut ViewSession,
        from: usize,
        target: isize,
    ) -> AppResult<MoveReport> {
        self.ensure_browsing(session)?;
        let result =
            moves::move_to_path_index(&mut self.store, session.current_path(), from, target);
        let report = self.rejecting(result)?;
        session.clear_transient();
        self.commit_move(&report)?;
        Ok(report)
    }

    /// Move the item at `from` to final position `to` of the viewed folder.
    pub fn reorder(
        &mut self,
        session: &mut ViewSession,
        from: usize,
        to: usize,
    ) -> AppResult<Option<ReorderReport>> {
        self.ensure_browsing(session)?;
        let result = moves::reorder(&mut self.store, session.current_path(), from, to);
        let Some(report) = self.rejecting(result)? else {
            return Ok(None);
        };
        session.clear_transient();

        info!(name = %report.name, from = report.from, to = report.to, "Reordered node");
        self.commit(
            TreeEvent::Reordered {
                name: report.name.clone(),
                from: report.from,
                to: report.to,
            },
            None,
            0,
        )?;
        Ok(Some(report))
    }

    /// Move every selected item to `destination`, then clear the selection.
    pub fn move_selected(
        &mut self,
        session: &mut ViewSession,
        destination: Destination,
    ) -> AppResult<Option<MoveReport>> {
        if session.selection().is_empty() {
            return self.rejecting(Err(AppError::invalid_move("Nothing selected to move")));
        }
        let indices = session.selection().indices().clone();
        self.move_batch(session, &indices, destination)
    }

    fn move_batch(
        &mut self,
        session: &mut ViewSession,
        indices: &BTreeSet<usize>,
        destination: Destination,
    ) -> AppResult<Option<MoveReport>> {
        self.ensure_browsing(session)?;
        let result = moves::move_many(&mut self.store, session.current_path(), indices, destination);
        let Some(report) = self.rejecting(result)? else {
            return Ok(None);
        };
        session.clear_transient();
        self.commit_move(&report)?;
        Ok(Some(report))
    }

    // ── Drag and drop ────────────────────────────────────────────────

    /// Start dragging the item at original `origin`.
    pub fn begin_drag(&mut self, session: &mut ViewSession, origin: usize) -> AppResult<()> {
        if !session.is_searching() && origin >= self.rendered_len(session)? {
            return self.rejecting(Err(AppError::invalid_move(format!(
                "No item at position {origin}"
            ))));
        }
        let (drag, selection, searching) = session.drag_parts();
        let result = drag.begin(origin, selection, searching);
        self.rejecting(result)
    }

    /// Drop the dragged items on `target` and carry out the move.
    pub fn drop(&mut self, session: &mut ViewSession, target: DropTarget) -> AppResult<DropOutcome> {
        let action = session.drag().drop_on(target, session.depth());
        session.drag_mut().end();

        let outcome = match action {
            DropAction::Nothing => DropOutcome::Nothing,
            DropAction::Rejected(message) => {
                return self.rejecting(Err(AppError::invalid_move(message)));
            }
            DropAction::MoveToFolder { from, to } => {
                DropOutcome::Moved(self.move_to_folder(session, from, to)?)
            }
            DropAction::MoveManyToFolder { indices, to } => self
                .move_batch(session, &indices, Destination::Folder(to))?
                .map_or(DropOutcome::Nothing, DropOutcome::Moved),
            DropAction::Reorder { from, to } => self
                .reorder(session, from, to)?
                .map_or(DropOutcome::Nothing, DropOutcome::Reordered),
            DropAction::MoveToParent { from } => self
                .move_to_parent(session, from)?
                .map_or(DropOutcome::Nothing, DropOutcome::Moved),
            DropAction::MoveManyToParent { indices } => self
                .move_batch(session, &indices, Destination::Parent)?
                .map_or(DropOutcome::Nothing, DropOutcome::Moved),
            DropAction::MoveToPath { from, target } => {
                DropOutcome::Moved(self.move_to_path_index(session, from, target)?)
            }
            DropAction::MoveManyToPath { indices, target } => self
                .move_batch(session, &indices, Destination::PathIndex(target))?
                .map_or(DropOutcome::Nothing, DropOutcome::Moved),
        };
        Ok(outcome)
    }

    /// Abandon the drag in progress.
    pub fn end_drag(&self, session: &mut ViewSession) {
        session.drag_mut().end();
    }

    // ── Import / export ──────────────────────────────────────────────

    /// Replace the whole tree with an imported payload.
    ///
    /// An invalid payload leaves the tree untouched. On success the view
    /// returns to the root with no search or selection. Returns the
    /// number of imported nodes.
    pub fn import_json(&mut self, session: &mut ViewSession, text: &str) -> AppResult<usize> {
        let roots = self.rejecting(parse_import(text))?;
        let node_count = roots.iter().map(Node::subtree_len).sum();
        self.store.replace(roots);
        session.reset();

        info!(nodes = node_count, "Imported bookmarks");
        self.commit(
            TreeEvent::Imported { node_count },
            Some("Import successful".to_string()),
            0,
        )?;
        Ok(node_count)
    }

    /// Serialize the tree for download, named after today's date.
    pub fn export(&self) -> AppResult<Export> {
        self.export_on(Local::now().date_naive())
    }

    /// Serialize the tree for download, named after `date`.
    pub fn export_on(&self, date: NaiveDate) -> AppResult<Export> {
        Ok(Export {
            file_name: export_file_name(&self.export_prefix, date),
            body: export_json(self.store.roots())?,
        })
    }

    // ── Internals ────────────────────────────────────────────────────

    fn id_at(&self, session: &ViewSession, index: usize) -> AppResult<NodeId> {
        self.store
            .children(session.current_path())?
            .get(index)
            .map(Node::id)
            .ok_or_else(|| AppError::not_found(format!("No item at position {index}")))
    }

    fn ensure_browsing(&mut self, session: &ViewSession) -> AppResult<()> {
        if session.is_searching() {
            return self.rejecting(Err(AppError::invalid_move(
                "Items cannot be moved while searching",
            )));
        }
        Ok(())
    }

    /// Detach node `id`, moving the view up if it was inside the node.
    fn remove_by_id(&mut self, session: &mut ViewSession, id: NodeId) -> Option<Node> {
        let location = self.store.locate(id)?;
        let retarget = self.holds_view(session, &location);
        let (items, index) = self.store.container_of(id)?;
        let node = items.remove(index);
        if retarget {
            session.retarget(location.path);
        }
        Some(node)
    }

    /// Whether the node at `location` is the viewed folder or one of its ancestors.
    ///
    /// Compares positions rather than names, so a same-named sibling of a
    /// viewed folder does not count.
    fn holds_view(&self, session: &ViewSession, location: &NodeLocation) -> bool {
        let depth = location.chain.len();
        self.store
            .locate_path(session.current_path())
            .is_some_and(|viewed| {
                viewed.len() > depth
                    && viewed[..depth] == location.chain[..]
                    && viewed[depth] == location.index
            })
    }

    /// Publish `Rejected` for rejections and hand the result back.
    fn rejecting<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        if let Err(e) = &result {
            if e.is_rejection() {
                warn!(kind = %e.kind, reason = %e.message, "Request rejected");
                self.sink.publish(DomainEvent::view(ViewEvent::Rejected {
                    message: e.message.clone(),
                }));
            }
        }
        result
    }

    fn commit_move(&mut self, report: &MoveReport) -> AppResult<()> {
        info!(
            moved = ?report.moved,
            destination = %report.destination,
            "Moved nodes"
        );
        self.commit(
            TreeEvent::Moved {
                names: report.moved.clone(),
                destination: report.destination.clone(),
            },
            Some(report.message()),
            0,
        )
    }

    /// Save, then announce the change.
    fn commit(&mut self, event: TreeEvent, notice: Option<String>, delay_ms: u64) -> AppResult<()> {
        let saved = self.gateway.save(self.store.roots());
        if let Err(e) = &saved {
            error!(error = %e, "Failed to save bookmarks; change kept in memory");
            self.sink.publish(DomainEvent::view(ViewEvent::PersistFailed {
                message: e.message.clone(),
            }));
        }

        self.sink.publish(DomainEvent::tree(event));
        self.sink
            .publish(DomainEvent::view(ViewEvent::RenderRequested { delay_ms }));
        if let Some(message) = notice {
            let notice = self.notices.post(message);
            self.sink.publish(DomainEvent::view(ViewEvent::Notice(notice)));
        }
        saved
    }
}
