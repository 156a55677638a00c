// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three objects, two of which receive events.
//!
//! The tree and the strawberry share enter/leave handlers and have their own
//! double-click handlers. The fish is in the scene but never registered, so
//! hovering it reads as hovering nothing. A scripted cursor plays the part of
//! the user, and a text "HUD" is printed after every step.
//!
//! Run:
//! - `cargo run -p understory_scene_events_demos --example three_objects`
//! - `RUST_LOG=trace` shows the dispatcher's own transitions.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_scene_events::input::{InputAction, MouseButton};
use understory_scene_events::{Dispatcher, EventKind, FocusPolicy, InputEvent};
use understory_scene_events_demos::{NodeId, Scene, SceneObject};

const ROOT: NodeId = NodeId(0);
const TREE: NodeId = NodeId(1);
const TREE_MESH: NodeId = NodeId(2);
const STRAWBERRY: NodeId = NodeId(3);
const FISH: NodeId = NodeId(4);

#[derive(Debug, Default)]
struct Hud {
    mouse_over: String,
    double_clicked: String,
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();
    // The tree model is a group with an unregistered mesh inside.
    scene.add(SceneObject {
        name: "Tree",
        path: vec![ROOT, TREE, TREE_MESH],
        rect: Rect::new(0.0, 0.0, 200.0, 400.0),
        depth: 10.0,
        thickness: 2.0,
    });
    scene.add(SceneObject {
        name: "Strawberry",
        path: vec![ROOT, STRAWBERRY],
        rect: Rect::new(300.0, 200.0, 400.0, 300.0),
        depth: 8.0,
        thickness: 1.0,
    });
    scene.add(SceneObject {
        name: "Fish",
        path: vec![ROOT, FISH],
        rect: Rect::new(500.0, 100.0, 700.0, 200.0),
        depth: 12.0,
        thickness: 1.0,
    });
    scene
}

fn main() {
    env_logger::init();

    let mut scene = build_scene();
    let hud = Rc::new(RefCell::new(Hud {
        mouse_over: "Mouse over nothing vegetable!".into(),
        double_clicked: String::new(),
    }));

    let mut events: Dispatcher<NodeId> =
        Dispatcher::new(FocusPolicy::PointerOver, FocusPolicy::PointerOver);
    events.set_ignore_back_faces(true);
    events.register(TREE);
    events.register(STRAWBERRY);

    let names = scene.clone();
    for node in [TREE, STRAWBERRY] {
        let enter_hud = Rc::clone(&hud);
        let names = names.clone();
        events
            .subscribe(node, EventKind::MouseEnter, move |args| {
                enter_hud.borrow_mut().mouse_over = format!("Mouse over {}", names.name_of(args.node));
            })
            .expect("registered above");
        let leave_hud = Rc::clone(&hud);
        events
            .subscribe(node, EventKind::MouseLeave, move |_| {
                leave_hud.borrow_mut().mouse_over = "Mouse over nothing vegetable!".into();
            })
            .expect("registered above");
    }
    for (node, text) in [
        (TREE, "Just a tree, not three!"),
        (STRAWBERRY, "A lone, field-less strawberry."),
    ] {
        let hud = Rc::clone(&hud);
        events
            .subscribe(node, EventKind::DoubleClick, move |_| {
                hud.borrow_mut().double_clicked = text.into();
            })
            .expect("registered above");
    }

    let script: &[(f64, Point, Option<InputAction>)] = &[
        (0.00, Point::new(100.0, 100.0), None),
        (0.05, Point::new(100.0, 100.0), Some(InputAction::Press(MouseButton::Left))),
        (0.06, Point::new(100.0, 100.0), Some(InputAction::Release(MouseButton::Left))),
        (0.15, Point::new(100.0, 100.0), Some(InputAction::Press(MouseButton::Left))),
        (0.16, Point::new(100.0, 100.0), Some(InputAction::Release(MouseButton::Left))),
        (0.50, Point::new(350.0, 250.0), None),
        (0.60, Point::new(600.0, 150.0), None),
        (0.70, Point::new(350.0, 250.0), None),
        (0.80, Point::new(350.0, 250.0), Some(InputAction::Press(MouseButton::Right))),
        (0.81, Point::new(350.0, 250.0), Some(InputAction::Release(MouseButton::Right))),
        (0.90, Point::new(350.0, 250.0), Some(InputAction::Press(MouseButton::Right))),
        (0.91, Point::new(350.0, 250.0), Some(InputAction::Release(MouseButton::Right))),
    ];

    for &(time, cursor, action) in script {
        if let Some(action) = action {
            events.handle(&InputEvent::new(time, cursor, action), &mut scene);
        } else {
            events.handle(&InputEvent::frame(time, cursor), &mut scene);
        }
        let hud = hud.borrow();
        println!(
            "t={time:.2} cursor=({:>5.1}, {:>5.1})  | {:<32} | {}",
            cursor.x, cursor.y, hud.mouse_over, hud.double_clicked
        );
    }
}
