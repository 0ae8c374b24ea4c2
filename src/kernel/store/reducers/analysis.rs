use crate::flow::FlowLayout;
use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_analysis_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Parse => super::DispatchResult {
                effects: vec![Effect::ParseWorkspace {
                    files: self.state.fs.read_all(),
                }],
                state_changed: false,
            },
            Action::ParseFinished(Ok(system)) => {
                self.state.system = Some(system.clone());
                self.show_success("OK");

                let mut effects = vec![Effect::GenerateFlow { system }];
                effects.extend(self.post_system_effect());
                super::DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::ParseFinished(Err(message)) => {
                super::DispatchResult::changed(self.show_error(message))
            }
            Action::FlowGenerated((mut nodes, edges)) => {
                FlowLayout::new(self.state.layout).apply(&mut nodes, &edges);
                self.state.flow = Some((nodes, edges));
                super::DispatchResult::changed(true)
            }
            Action::FlowFailed(message) => super::DispatchResult::changed(self.show_error(message)),
            _ => super::DispatchResult::unchanged(),
        }
    }
}
