// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and wheel focus policies.
//!
//! Keyboard events follow the pointer while wheel events go to the last
//! object pressed. Halfway through, the host swaps both policies; each focus
//! keeps its current target across the swap.
//!
//! Run:
//! - `cargo run -p understory_scene_events_demos --example focus_policies`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_scene_events::input::{InputAction, KeyCode, MouseButton, ScrollMotion};
use understory_scene_events::{Dispatcher, EventKind, FocusPolicy, InputEvent};
use understory_scene_events_demos::{NodeId, Scene, SceneObject};

const ROOT: NodeId = NodeId(0);

#[derive(Copy, Clone, Debug)]
enum Step {
    Frame(Point),
    Input(Point, InputAction),
    SwapPolicies,
}

fn main() {
    env_logger::init();

    let mut scene = Scene::new();
    let objects = [("Tree", 1, 0.0), ("Strawberry", 2, 250.0), ("Fish", 3, 500.0)];
    for (name, id, x0) in objects {
        scene.add(SceneObject {
            name,
            path: vec![ROOT, NodeId(id)],
            rect: Rect::new(x0, 0.0, x0 + 200.0, 200.0),
            depth: 5.0,
            thickness: 1.0,
        });
    }

    let mut events: Dispatcher<NodeId> =
        Dispatcher::new(FocusPolicy::PointerOver, FocusPolicy::ButtonDown);

    let status = Rc::new(RefCell::new(String::from("waiting for input")));
    for (name, id, _) in objects {
        let node = NodeId(id);
        events.register(node);
        let handlers: [(EventKind, &'static str); 3] = [
            (EventKind::MouseWheelUp, "mouse wheel up!"),
            (EventKind::MouseWheelDown, "mouse wheel down!"),
            (EventKind::KeyDown, "key down"),
        ];
        for (kind, what) in handlers {
            let status = Rc::clone(&status);
            events
                .subscribe(node, kind, move |args| {
                    let mut s = status.borrow_mut();
                    *s = match args.input.action {
                        InputAction::KeyDown(KeyCode(code)) => {
                            let key = char::from_u32(code).unwrap_or('?');
                            format!("{name}: {what}: {key}")
                        }
                        _ => format!("{name}: {what}"),
                    };
                })
                .expect("registered above");
        }
    }

    let tree = Point::new(100.0, 100.0);
    let fish = Point::new(600.0, 100.0);
    let key = |c: char| InputAction::KeyDown(KeyCode(u32::from(c)));
    let script = [
        Step::Frame(tree),
        Step::Input(tree, InputAction::Press(MouseButton::Left)),
        Step::Input(tree, InputAction::Release(MouseButton::Left)),
        Step::Frame(fish),
        Step::Input(fish, key('a')),
        Step::Input(fish, InputAction::Scroll(ScrollMotion::Up)),
        Step::SwapPolicies,
        Step::Frame(tree),
        Step::Input(tree, key('b')),
        Step::Input(tree, InputAction::Scroll(ScrollMotion::Down)),
        Step::Frame(fish),
        Step::Input(fish, InputAction::Scroll(ScrollMotion::Down)),
    ];

    let mut time = 0.0;
    for step in script {
        time += 0.1;
        match step {
            Step::Frame(cursor) => {
                events.handle(&InputEvent::frame(time, cursor), &mut scene);
            }
            Step::Input(cursor, action) => {
                events.handle(&InputEvent::new(time, cursor, action), &mut scene);
            }
            Step::SwapPolicies => {
                let keyboard = events.keyboard_focus_policy();
                let wheel = events.mouse_wheel_focus_policy();
                events.set_keyboard_focus_policy(wheel);
                events.set_mouse_wheel_focus_policy(keyboard);
            }
        }
        let name = |n: Option<NodeId>| n.map_or("nothing", |n| scene.name_of(n));
        println!(
            "{:<28} keyboard: {:?} -> {:<10} wheel: {:?} -> {:<10} | {}",
            format!("{step:?}"),
            events.keyboard_focus_policy(),
            name(events.keyboard_focus()),
            events.mouse_wheel_focus_policy(),
            name(events.mouse_wheel_focus()),
            status.borrow(),
        );
    }
}
