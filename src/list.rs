/*
单链表：List 独占 head，每个 Node 独占它的 next，形成一条没有共享、没有环的所有权链。
push_front 只会把新节点放到链首，所以链永远有终点。
*/

use log::{debug, trace};

use crate::error::{ListError, Result};

type Link = Option<Box<Node>>;

#[derive(Debug)]
pub struct Node {
    value: i32,
    next: Link,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Node { value, next: None }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

#[derive(Debug, Default)]
pub struct List {
    head: Link,
}

impl List {
    pub fn new() -> Self {
        List { head: None }
    }

    pub fn push_front(&mut self, node: Node) {
        let mut new_node = Box::new(node);
        new_node.next = self.head.take();
        trace!("push_front value={}", new_node.value);

        self.head = Some(new_node);
    }

    pub fn head_value(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.value)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

/// Pushes `node` onto the front of `list`.
///
/// Either handle may be absent. The list is checked first, then the node, and
/// nothing is mutated unless both are present.
pub fn push_front(list: Option<&mut List>, node: Option<Node>) -> Result<()> {
    let Some(list) = list else {
        debug!("push_front rejected: null list");
        return Err(ListError::NullList);
    };
    let Some(node) = node else {
        debug!("push_front rejected: null node");
        return Err(ListError::NullNode);
    };

    list.push_front(node);
    Ok(())
}

// 逐个 take next，避免递归 drop 在长链上爆栈
impl Drop for List {
    fn drop(&mut self) {
        let mut cur_node = self.head.take();
        while let Some(mut node) = cur_node {
            cur_node = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
