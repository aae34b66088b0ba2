use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;


use super::managererror::ManagerError;
use super::namedobject::NamedObject;
use crate::math::function::namedfunction::NamedFunction;


pub trait IManager<V> where
    V: Clone + NamedObject {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert(&self, obj: V) -> Result<(), ManagerError> {
        let mut map = self.map();
        if map.contains_key(obj.name()) {
            return Err(ManagerError::DuplicateNameError(obj.name().to_owned()));
        }
        map.insert(obj.name().to_owned(), obj);
        Ok(())
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    order_cell: RefCell<Vec<String>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone + NamedObject {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {
            map_cell: RefCell::new(HashMap::new()),
            order_cell: RefCell::new(Vec::new()),
            get_obj_from_json
        }
    }

    /// 依註冊順序列出所有物件。
    pub fn values_in_order(&self) -> Vec<V> {
        let map = self.map_cell.borrow();
        self.order_cell
            .borrow()
            .iter()
            .filter_map(|name| map.get(name).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone + NamedObject {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert(&self, obj: V) -> Result<(), ManagerError> {
        let name = obj.name().to_owned();
        let mut map = self.map();
        if map.contains_key(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }
        map.insert(name.clone(), obj);
        self.order_cell.borrow_mut().push(name);
        Ok(())
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let v = (self.get_obj_from_json)(json_value)?;
        self.insert(v)
    }
}


fn get_named_function_from_json(json_value: serde_json::Value) -> Result<NamedFunction, ManagerError> {
    ManagerError::from_json_or_json_parse_error(json_value)
}

pub type FunctionManager = Manager<NamedFunction>;

impl FunctionManager {
    pub fn function_manager() -> FunctionManager {
        Manager::new(get_named_function_from_json)
    }

    /// 預先註冊四種標準波形（t = 0）。
    pub fn with_catalog() -> FunctionManager {
        let manager = FunctionManager::function_manager();
        for f in NamedFunction::catalog() {
            // 目錄名稱互不相同
            let _ = manager.insert(f);
        }
        manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::canonicalfunction::CanonicalFunction;

    #[test]
    fn registers_functions_from_json_in_order() {
        let manager = FunctionManager::function_manager();
        let json = serde_json::json!([
            { "name": "late_pulse", "function_type": "Rectangle", "shift": 1.0 },
            { "name": "decay", "function_type": "Exponential" }
        ]);
        let json_vec: Vec<serde_json::Value> = serde_json::from_value(json).unwrap();
        manager.insert_obj_from_json_vec(&json_vec).unwrap();
        assert_eq!(manager.len(), 2);
        let names: Vec<String> = manager.values_in_order().iter().map(|f| f.name().clone()).collect();
        assert_eq!(names, vec!["late_pulse", "decay"]);
        assert_eq!(manager.get("decay").unwrap().function().function_type(), CanonicalFunction::Exponential);
    }

    #[test]
    fn unknown_and_duplicate_names_are_errors() {
        let manager = FunctionManager::with_catalog();
        assert_eq!(manager.len(), 4);
        assert!(matches!(manager.get("sawtooth"), Err(ManagerError::NameNotFoundError(_))));
        let again = NamedFunction::canonical(CanonicalFunction::Rectangle);
        assert!(matches!(manager.insert(again), Err(ManagerError::DuplicateNameError(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let manager = FunctionManager::function_manager();
        let json = serde_json::json!({ "name": "bad", "function_type": "Sawtooth" });
        assert!(matches!(manager.insert_obj_from_json(json), Err(ManagerError::JsonParseError(_))));
    }
}
