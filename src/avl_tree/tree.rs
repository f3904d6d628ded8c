use crate::avl_tree::node::Node;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `child_dir` is the direction the new key took below the child on the heavy side. Going outward
// means a single rotation fixes the node; going inward needs the double rotation.
fn balance_after_insert<T>(tree: &mut Tree<T>, child_dir: Ordering) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if child_dir == Ordering::Greater {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if child_dir == Ordering::Less {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// After a removal the heavy child may be perfectly balanced, so the rotation case is picked from
// the child's balance factor instead of a key comparison.
fn balance_after_remove<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let has_left = tree.as_ref().map_or(false, |node| node.left.is_some());
    if has_left {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance_after_remove(tree);
        return min;
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

// Returns the direction taken at the root of `tree`, `Equal` if the key became the root, or `None`
// if the key was already present.
fn insert_node<T>(tree: &mut Tree<T>, key: T) -> Option<Ordering>
where
    T: Ord,
{
    let (dir, child_dir) = match tree {
        Some(ref mut node) => {
            let dir = key.cmp(&node.key);
            let child_dir = match dir {
                Ordering::Less => insert_node(&mut node.left, key)?,
                Ordering::Greater => insert_node(&mut node.right, key)?,
                Ordering::Equal => return None,
            };
            (dir, child_dir)
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Some(Ordering::Equal);
        },
    };

    balance_after_insert(tree, child_dir);
    Some(dir)
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    insert_node(tree, key).is_some()
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let removed = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let removed = remove(&mut node.left, key);
                *tree = Some(node);
                removed
            },
            Ordering::Greater => {
                let removed = remove(&mut node.right, key);
                *tree = Some(node);
                removed
            },
            Ordering::Equal => {
                if node.left.is_none() {
                    *tree = node.right.take();
                } else if node.right.is_none() {
                    *tree = node.left.take();
                } else {
                    let successor = remove_min(&mut node.right);
                    node.key = successor.key;
                    *tree = Some(node);
                }
                true
            },
        },
        None => return false,
    };

    if removed {
        balance_after_remove(tree);
    }
    removed
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn len<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => len(&node.left) + len(&node.right) + 1,
    }
}

// Returns the verified height of `tree`, or `None` if a key is out of order, a node is out of
// balance or a cached height is stale.
pub fn checked_height<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> Option<isize>
where
    T: Ord,
{
    let node = match tree {
        None => return Some(-1),
        Some(ref node) => node,
    };

    if lower.map_or(false, |lower| *lower >= node.key)
        || upper.map_or(false, |upper| *upper <= node.key)
    {
        return None;
    }

    let left_height = checked_height(&node.left, lower, Some(&node.key))?;
    let right_height = checked_height(&node.right, Some(&node.key), upper)?;
    let height = cmp::max(left_height, right_height) + 1;

    if (left_height - right_height).abs() > 1 || height != node.height {
        return None;
    }
    Some(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            assert!(insert(&mut tree, *key));
        }
        tree
    }

    fn root_key(tree: &Tree<u32>) -> u32 {
        tree.as_ref().map(|node| node.key).unwrap()
    }

    #[test]
    fn test_height_empty() {
        let tree: Tree<u32> = None;
        assert_eq!(height(&tree), -1);
    }

    #[test]
    fn test_left_left_insert() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_left_right_insert() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_right_right_insert() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_right_left_insert() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(root_key(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_insert_duplicate_keeps_shape() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!insert(&mut tree, 1));
        assert_eq!(len(&tree), 3);
        assert_eq!(checked_height(&tree, None, None), Some(1));
    }

    #[test]
    fn test_remove_with_balanced_child() {
        // Removing 5 leaves the left child 2 perfectly balanced, which needs a single rotation.
        let mut tree = build(&[4, 2, 5, 1, 3, 6]);
        assert!(remove(&mut tree, &6));
        assert!(remove(&mut tree, &5));
        assert_eq!(root_key(&tree), 2);
        assert_eq!(checked_height(&tree, None, None), Some(2));
    }

    #[test]
    fn test_remove_left_right() {
        let mut tree = build(&[5, 2, 8, 3]);
        assert!(remove(&mut tree, &8));
        assert_eq!(root_key(&tree), 3);
        assert_eq!(checked_height(&tree, None, None), Some(1));
    }

    #[test]
    fn test_remove_two_children_takes_successor() {
        let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        assert!(remove(&mut tree, &4));
        assert_eq!(root_key(&tree), 5);
        assert!(!contains(&tree, &4));
        assert_eq!(len(&tree), 6);
        assert!(checked_height(&tree, None, None).is_some());
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!remove(&mut tree, &4));
        assert_eq!(len(&tree), 3);
    }

    #[test]
    fn test_remove_min_rebalances() {
        let mut tree = build(&[2, 1, 3, 4]);
        let min = remove_min(&mut tree);
        assert_eq!(min.key, 1);
        assert_eq!(root_key(&tree), 3);
        assert!(checked_height(&tree, None, None).is_some());
    }

    #[test]
    fn test_checked_height_detects_stale_height() {
        let mut tree = build(&[2, 1, 3]);
        if let Some(ref mut node) = tree {
            node.height = 5;
        }
        assert_eq!(checked_height(&tree, None, None), None);
    }

    #[test]
    fn test_checked_height_detects_misordered_keys() {
        let mut tree = build(&[2, 1, 3]);
        if let Some(ref mut node) = tree {
            node.key = 0;
        }
        assert_eq!(checked_height(&tree, None, None), None);
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[5, 3, 8, 1]);
        assert_eq!(min(&tree), Some(&1));
        assert_eq!(max(&tree), Some(&8));
    }
}
