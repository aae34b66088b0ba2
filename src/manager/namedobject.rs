use crate::math::function::namedfunction::NamedFunction;

/// 可依名稱註冊於 `Manager` 的物件。
pub trait NamedObject {
    fn name(&self) -> &String;
}

impl NamedObject for NamedFunction {
    fn name(&self) -> &String {
        NamedFunction::name(self)
    }
}
